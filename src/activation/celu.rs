//! Applies the continuously differentiable exponential linear unit.
//!
//! Nonlinearity: `y = max(0, x) + min(0, alpha * (e^(x / alpha) - 1))`
//!
//! CELU equals ELU at `alpha = 1` and, unlike ELU, stays continuously
//! differentiable at zero for every other choice of `alpha`.
use co::error::Error;
use co::tensor::SharedTensor;
use activation::ComplexMode;
#[cfg(feature = "native")]
use co::backend::Backend;
#[cfg(feature = "native")]
use co::frameworks::Native;
#[cfg(feature = "native")]
use util::native_map1;

/// Provides the CELU operation of a backend.
pub trait Celu<F> {
    /// Computes the CELU over `x`, writing the result into `result`.
    ///
    /// Manages the synchronization of the operand's memory to the backend
    /// device before computing.
    fn celu(&self,
            x: &mut SharedTensor<F>,
            alpha: F,
            complex_mode: ComplexMode,
            result: &mut SharedTensor<F>)
            -> Result<(), Error>;

    /// Computes the CELU over `x` without any memory management.
    fn celu_plain(&self,
                  x: &SharedTensor<F>,
                  alpha: F,
                  complex_mode: ComplexMode,
                  result: &mut SharedTensor<F>)
                  -> Result<(), Error>;
}

#[derive(Debug, Copy, Clone)]
/// Specifies configuration parameters for a CELU operation.
pub struct CeluConfig {
    /// The negative slope of the exponential branch.
    ///
    /// Default: 1.0
    pub alpha: f32,
    /// How the backend treats complex input.
    ///
    /// Default: ComplexMode::Jax
    pub complex_mode: ComplexMode,
}

impl ::std::default::Default for CeluConfig {
    fn default() -> CeluConfig {
        CeluConfig {
            alpha: 1.0,
            complex_mode: ComplexMode::Jax,
        }
    }
}

#[cfg(feature = "native")]
macro_rules! impl_ops_celu_for {
    ($t:ident, $b:ty) => (
        impl Celu<$t> for $b {
            fn celu(&self,
                    x: &mut SharedTensor<$t>,
                    alpha: $t,
                    complex_mode: ComplexMode,
                    result: &mut SharedTensor<$t>)
                    -> Result<(), Error> {
                match x.add_device(self.device()) { _ => try!(x.sync(self.device())) }
                match result.add_device(self.device()) { _ => () }
                self.celu_plain(x, alpha, complex_mode, result)
            }

            fn celu_plain(&self,
                          x: &SharedTensor<$t>,
                          alpha: $t,
                          _complex_mode: ComplexMode,
                          result: &mut SharedTensor<$t>)
                          -> Result<(), Error> {
                native_map1(x, result, self.device(), |v: $t| {
                    v.max(0.0) + (alpha * ((v / alpha).exp() - 1.0)).min(0.0)
                })
            }
        }
    );
}

#[cfg(feature = "native")]
impl_ops_celu_for!(f32, Backend<Native>);
#[cfg(feature = "native")]
impl_ops_celu_for!(f64, Backend<Native>);
