//! Applies the exponential linear unit.
//!
//! Nonlinearity: `y = x for x > 0, y = alpha * (e^x - 1) otherwise`
//!
//! Compared to the plain ReLU, the exponential branch keeps a gradient
//! flowing for negative input and pushes mean activations towards zero.
//! `alpha` scales the saturation value for negative input.
use co::error::Error;
use co::tensor::SharedTensor;
#[cfg(feature = "native")]
use co::backend::Backend;
#[cfg(feature = "native")]
use co::frameworks::Native;
#[cfg(feature = "native")]
use util::native_map1;

/// Provides the ELU operation of a backend.
pub trait Elu<F> {
    /// Computes the ELU over `x`, writing the result into `result`.
    ///
    /// Manages the synchronization of the operand's memory to the backend
    /// device before computing.
    fn elu(&self,
           x: &mut SharedTensor<F>,
           alpha: F,
           result: &mut SharedTensor<F>)
           -> Result<(), Error>;

    /// Computes the ELU over `x` without any memory management.
    fn elu_plain(&self,
                 x: &SharedTensor<F>,
                 alpha: F,
                 result: &mut SharedTensor<F>)
                 -> Result<(), Error>;
}

#[derive(Debug, Copy, Clone)]
/// Specifies configuration parameters for an ELU operation.
pub struct EluConfig {
    /// Scales the saturation value for negative input.
    ///
    /// Default: 1.0
    pub alpha: f32,
}

impl ::std::default::Default for EluConfig {
    fn default() -> EluConfig {
        EluConfig { alpha: 1.0 }
    }
}

#[cfg(feature = "native")]
macro_rules! impl_ops_elu_for {
    ($t:ident, $b:ty) => (
        impl Elu<$t> for $b {
            fn elu(&self,
                   x: &mut SharedTensor<$t>,
                   alpha: $t,
                   result: &mut SharedTensor<$t>)
                   -> Result<(), Error> {
                match x.add_device(self.device()) { _ => try!(x.sync(self.device())) }
                match result.add_device(self.device()) { _ => () }
                self.elu_plain(x, alpha, result)
            }

            fn elu_plain(&self,
                         x: &SharedTensor<$t>,
                         alpha: $t,
                         result: &mut SharedTensor<$t>)
                         -> Result<(), Error> {
                native_map1(x, result, self.device(), |v: $t| {
                    if v > 0.0 { v } else { alpha * (v.exp() - 1.0) }
                })
            }
        }
    );
}

#[cfg(feature = "native")]
impl_ops_elu_for!(f32, Backend<Native>);
#[cfg(feature = "native")]
impl_ops_elu_for!(f64, Backend<Native>);
