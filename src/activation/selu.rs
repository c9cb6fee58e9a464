//! Applies the scaled exponential linear unit.
//!
//! Nonlinearity: `y = scale * x for x > 0, y = scale * alpha * (e^x - 1) otherwise`
//!
//! The two constants are fixed by the self-normalizing neural network
//! derivation (`alpha = 1.6732632423543772`, `scale = 1.0507009873554805`)
//! and are not configurable.
use co::error::Error;
use co::tensor::SharedTensor;
#[cfg(feature = "native")]
use co::backend::Backend;
#[cfg(feature = "native")]
use co::frameworks::Native;
#[cfg(feature = "native")]
use util::native_map1;

/// Provides the SELU operation of a backend.
pub trait Selu<F> {
    /// Computes the SELU over `x`, writing the result into `result`.
    ///
    /// Manages the synchronization of the operand's memory to the backend
    /// device before computing.
    fn selu(&self,
            x: &mut SharedTensor<F>,
            result: &mut SharedTensor<F>)
            -> Result<(), Error>;

    /// Computes the SELU over `x` without any memory management.
    fn selu_plain(&self,
                  x: &SharedTensor<F>,
                  result: &mut SharedTensor<F>)
                  -> Result<(), Error>;
}

#[cfg(feature = "native")]
macro_rules! impl_ops_selu_for {
    ($t:ident, $b:ty) => (
        impl Selu<$t> for $b {
            fn selu(&self,
                    x: &mut SharedTensor<$t>,
                    result: &mut SharedTensor<$t>)
                    -> Result<(), Error> {
                match x.add_device(self.device()) { _ => try!(x.sync(self.device())) }
                match result.add_device(self.device()) { _ => () }
                self.selu_plain(x, result)
            }

            fn selu_plain(&self,
                          x: &SharedTensor<$t>,
                          result: &mut SharedTensor<$t>)
                          -> Result<(), Error> {
                let alpha: $t = 1.6732632423543772;
                let scale: $t = 1.0507009873554805;
                native_map1(x, result, self.device(), |v: $t| {
                    if v > 0.0 { scale * v } else { scale * alpha * (v.exp() - 1.0) }
                })
            }
        }
    );
}

#[cfg(feature = "native")]
impl_ops_selu_for!(f32, Backend<Native>);
#[cfg(feature = "native")]
impl_ops_selu_for!(f64, Backend<Native>);
