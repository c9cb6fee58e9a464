//! Applies the sigmoid-weighted linear unit, also known as swish.
//!
//! Nonlinearity: `y = x / (1 + e^(-x))`
use co::error::Error;
use co::tensor::SharedTensor;
#[cfg(feature = "native")]
use co::backend::Backend;
#[cfg(feature = "native")]
use co::frameworks::Native;
#[cfg(feature = "native")]
use util::native_map1;

/// Provides the SiLU operation of a backend.
pub trait Silu<F> {
    /// Computes the SiLU over `x`, writing the result into `result`.
    ///
    /// Manages the synchronization of the operand's memory to the backend
    /// device before computing.
    fn silu(&self,
            x: &mut SharedTensor<F>,
            result: &mut SharedTensor<F>)
            -> Result<(), Error>;

    /// Computes the SiLU over `x` without any memory management.
    fn silu_plain(&self,
                  x: &SharedTensor<F>,
                  result: &mut SharedTensor<F>)
                  -> Result<(), Error>;
}

#[cfg(feature = "native")]
macro_rules! impl_ops_silu_for {
    ($t:ident, $b:ty) => (
        impl Silu<$t> for $b {
            fn silu(&self,
                    x: &mut SharedTensor<$t>,
                    result: &mut SharedTensor<$t>)
                    -> Result<(), Error> {
                match x.add_device(self.device()) { _ => try!(x.sync(self.device())) }
                match result.add_device(self.device()) { _ => () }
                self.silu_plain(x, result)
            }

            fn silu_plain(&self,
                          x: &SharedTensor<$t>,
                          result: &mut SharedTensor<$t>)
                          -> Result<(), Error> {
                native_map1(x, result, self.device(), |v: $t| {
                    v / (1.0 + (-v).exp())
                })
            }
        }
    );
}

#[cfg(feature = "native")]
impl_ops_silu_for!(f32, Backend<Native>);
#[cfg(feature = "native")]
impl_ops_silu_for!(f64, Backend<Native>);
