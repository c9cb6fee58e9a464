//! Applies the tanh shrink function.
//!
//! Nonlinearity: `y = x - tanh(x)`
use co::error::Error;
use co::tensor::SharedTensor;
#[cfg(feature = "native")]
use co::backend::Backend;
#[cfg(feature = "native")]
use co::frameworks::Native;
#[cfg(feature = "native")]
use util::native_map1;

/// Provides the tanh shrink operation of a backend.
pub trait Tanhshrink<F> {
    /// Computes the tanh shrink over `x`, writing the result into `result`.
    ///
    /// Manages the synchronization of the operand's memory to the backend
    /// device before computing.
    fn tanhshrink(&self,
                  x: &mut SharedTensor<F>,
                  result: &mut SharedTensor<F>)
                  -> Result<(), Error>;

    /// Computes the tanh shrink over `x` without any memory management.
    fn tanhshrink_plain(&self,
                        x: &SharedTensor<F>,
                        result: &mut SharedTensor<F>)
                        -> Result<(), Error>;
}

#[cfg(feature = "native")]
macro_rules! impl_ops_tanhshrink_for {
    ($t:ident, $b:ty) => (
        impl Tanhshrink<$t> for $b {
            fn tanhshrink(&self,
                          x: &mut SharedTensor<$t>,
                          result: &mut SharedTensor<$t>)
                          -> Result<(), Error> {
                match x.add_device(self.device()) { _ => try!(x.sync(self.device())) }
                match result.add_device(self.device()) { _ => () }
                self.tanhshrink_plain(x, result)
            }

            fn tanhshrink_plain(&self,
                                x: &SharedTensor<$t>,
                                result: &mut SharedTensor<$t>)
                                -> Result<(), Error> {
                native_map1(x, result, self.device(), |v: $t| {
                    v - v.tanh()
                })
            }
        }
    );
}

#[cfg(feature = "native")]
impl_ops_tanhshrink_for!(f32, Backend<Native>);
#[cfg(feature = "native")]
impl_ops_tanhshrink_for!(f64, Backend<Native>);
