//! Provides backend-agnostic, nonlinear activation operations.
//!
//! Every activation is described by its own capability trait. A backend
//! advertises support for an activation by implementing the trait; consumers
//! state their requirements as trait bounds and stay portable across
//! backends. Thanks to the nonlinearity of the activation methods, networks
//! built from them can 'learn' and detect nonlinearities in (complex)
//! datasets.
//!
//! Each operation writes its result into a caller-provided output tensor and
//! comes in two flavours:
//!
//! * a managed variant (e.g. `elu`), which synchronizes the operand's memory
//!   to the backend device before computing, and
//! * a `_plain` variant (e.g. `elu_plain`), which performs no memory
//!   management and expects all memory to already live on the backend device.
//!
//! Activations that take parameters pair their trait with a configuration
//! struct whose `Default` implementation carries the conventional parameter
//! values.
//!
//! The actual numeric work happens in the backend implementing these traits;
//! implementations for the native host CPU ship with this crate behind the
//! `native` feature.

pub use self::celu::{Celu, CeluConfig};
pub use self::elu::{Elu, EluConfig};
pub use self::hardtanh::{Hardtanh, HardtanhConfig};
pub use self::logit::{Logit, LogitConfig};
pub use self::logsigmoid::{LogSigmoid, LogSigmoidConfig};
pub use self::prelu::Prelu;
pub use self::relu6::{Relu6, Relu6Config};
pub use self::selu::Selu;
pub use self::silu::Silu;
pub use self::tanhshrink::Tanhshrink;
pub use self::thresholded_relu::{ThresholdedRelu, ThresholdedReluConfig};

pub mod celu;
pub mod elu;
pub mod hardtanh;
pub mod logit;
pub mod logsigmoid;
pub mod prelu;
pub mod relu6;
pub mod selu;
pub mod silu;
pub mod tanhshrink;
pub mod thresholded_relu;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
/// Specifies how a backend treats complex input values.
///
/// The mode is forwarded to the backend operation unchanged; what each mode
/// means for a complex element type is decided by the backend. Backends over
/// real element types, such as the native one shipped with this crate, accept
/// any mode.
pub enum ComplexMode {
    /// Apply the operation separately to the real and the imaginary part.
    Split,
    /// Apply the operation to the magnitude and keep the phase.
    Magnitude,
    /// Follow the JAX convention for the operation's complex extension.
    Jax,
}

impl ::std::default::Default for ComplexMode {
    fn default() -> ComplexMode {
        ComplexMode::Jax
    }
}
