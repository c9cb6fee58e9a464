//! Applies the parametric rectified linear unit.
//!
//! Nonlinearity: `y = x for x >= 0, y = slope * x otherwise`
//!
//! Unlike the leaky ReLU, the negative slope is not a fixed constant but an
//! operand in its own right: a tensor that is broadcast against the input.
//! A one-element slope applies everywhere; a larger slope tensor must tile
//! the input (its size evenly dividing the input size), which covers the
//! usual one-slope-per-channel setups. The exact broadcast rule is the
//! backend's to define; the one described here is what the native backend
//! implements.
use co::error::Error;
use co::tensor::SharedTensor;
#[cfg(feature = "native")]
use co::backend::Backend;
#[cfg(feature = "native")]
use co::frameworks::Native;
#[cfg(feature = "native")]
use util::native_map2;

/// Provides the PReLU operation of a backend.
pub trait Prelu<F> {
    /// Computes the PReLU of `x` with the given `slope` tensor, writing the
    /// result into `result`.
    ///
    /// Manages the synchronization of the memory of both operands to the
    /// backend device before computing.
    fn prelu(&self,
             x: &mut SharedTensor<F>,
             slope: &mut SharedTensor<F>,
             result: &mut SharedTensor<F>)
             -> Result<(), Error>;

    /// Computes the PReLU of `x` without any memory management.
    fn prelu_plain(&self,
                   x: &SharedTensor<F>,
                   slope: &SharedTensor<F>,
                   result: &mut SharedTensor<F>)
                   -> Result<(), Error>;
}

#[cfg(feature = "native")]
macro_rules! impl_ops_prelu_for {
    ($t:ident, $b:ty) => (
        impl Prelu<$t> for $b {
            fn prelu(&self,
                     x: &mut SharedTensor<$t>,
                     slope: &mut SharedTensor<$t>,
                     result: &mut SharedTensor<$t>)
                     -> Result<(), Error> {
                match x.add_device(self.device()) { _ => try!(x.sync(self.device())) }
                match slope.add_device(self.device()) { _ => try!(slope.sync(self.device())) }
                match result.add_device(self.device()) { _ => () }
                self.prelu_plain(x, slope, result)
            }

            fn prelu_plain(&self,
                           x: &SharedTensor<$t>,
                           slope: &SharedTensor<$t>,
                           result: &mut SharedTensor<$t>)
                           -> Result<(), Error> {
                native_map2(x, slope, result, self.device(), |v: $t, slope: $t| {
                    if v >= 0.0 { v } else { slope * v }
                })
            }
        }
    );
}

#[cfg(feature = "native")]
impl_ops_prelu_for!(f32, Backend<Native>);
#[cfg(feature = "native")]
impl_ops_prelu_for!(f64, Backend<Native>);
