//! Applies the rectified linear unit capped at 6.
//!
//! Nonlinearity: `y = min(max(0, x), 6)`
//!
//! The cap keeps activations in a range that low-precision fixed point
//! formats represent well, which made ReLU6 a staple of mobile
//! architectures.
use co::error::Error;
use co::tensor::SharedTensor;
use activation::ComplexMode;
#[cfg(feature = "native")]
use co::backend::Backend;
#[cfg(feature = "native")]
use co::frameworks::Native;
#[cfg(feature = "native")]
use util::native_map1;

/// Provides the ReLU6 operation of a backend.
pub trait Relu6<F> {
    /// Computes the ReLU6 over `x`, writing the result into `result`.
    ///
    /// Manages the synchronization of the operand's memory to the backend
    /// device before computing.
    fn relu6(&self,
             x: &mut SharedTensor<F>,
             complex_mode: ComplexMode,
             result: &mut SharedTensor<F>)
             -> Result<(), Error>;

    /// Computes the ReLU6 over `x` without any memory management.
    fn relu6_plain(&self,
                   x: &SharedTensor<F>,
                   complex_mode: ComplexMode,
                   result: &mut SharedTensor<F>)
                   -> Result<(), Error>;
}

#[derive(Debug, Copy, Clone)]
/// Specifies configuration parameters for a ReLU6 operation.
pub struct Relu6Config {
    /// How the backend treats complex input.
    ///
    /// Default: ComplexMode::Jax
    pub complex_mode: ComplexMode,
}

impl ::std::default::Default for Relu6Config {
    fn default() -> Relu6Config {
        Relu6Config { complex_mode: ComplexMode::Jax }
    }
}

#[cfg(feature = "native")]
macro_rules! impl_ops_relu6_for {
    ($t:ident, $b:ty) => (
        impl Relu6<$t> for $b {
            fn relu6(&self,
                     x: &mut SharedTensor<$t>,
                     complex_mode: ComplexMode,
                     result: &mut SharedTensor<$t>)
                     -> Result<(), Error> {
                match x.add_device(self.device()) { _ => try!(x.sync(self.device())) }
                match result.add_device(self.device()) { _ => () }
                self.relu6_plain(x, complex_mode, result)
            }

            fn relu6_plain(&self,
                           x: &SharedTensor<$t>,
                           _complex_mode: ComplexMode,
                           result: &mut SharedTensor<$t>)
                           -> Result<(), Error> {
                native_map1(x, result, self.device(), |v: $t| {
                    v.max(0.0).min(6.0)
                })
            }
        }
    );
}

#[cfg(feature = "native")]
impl_ops_relu6_for!(f32, Backend<Native>);
#[cfg(feature = "native")]
impl_ops_relu6_for!(f64, Backend<Native>);
