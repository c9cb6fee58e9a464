//! Computes the logit, the inverse of the standard logistic function.
//!
//! Nonlinearity: `y = ln(x / (1 - x))`
//!
//! The logit maps probabilities from `(0, 1)` onto the whole real line and is
//! only defined there. Without an `eps` clamp the operation mirrors the usual
//! floating point conventions at the domain boundary: `x = 0` maps to `-inf`,
//! `x = 1` maps to `inf` and anything outside `[0, 1]` maps to `NaN`. With
//! `eps` set, the input is clamped to `[eps, 1 - eps]` first, which keeps the
//! output finite.
use co::error::Error;
use co::tensor::SharedTensor;
use activation::ComplexMode;
#[cfg(feature = "native")]
use co::backend::Backend;
#[cfg(feature = "native")]
use co::frameworks::Native;
#[cfg(feature = "native")]
use util::native_map1;

/// Provides the logit operation of a backend.
pub trait Logit<F> {
    /// Computes the elementwise logit of `x`, writing the result into `result`.
    ///
    /// For the meaning of `eps` and `complex_mode` see the
    /// [module description][logit].
    /// [logit]: ./index.html
    ///
    /// Manages the synchronization of the operand's memory to the backend
    /// device before computing.
    fn logit(&self,
             x: &mut SharedTensor<F>,
             eps: Option<F>,
             complex_mode: ComplexMode,
             result: &mut SharedTensor<F>)
             -> Result<(), Error>;

    /// Computes the elementwise logit of `x` without any memory management.
    ///
    /// Expects all tensor memory to already live on the backend device.
    fn logit_plain(&self,
                   x: &SharedTensor<F>,
                   eps: Option<F>,
                   complex_mode: ComplexMode,
                   result: &mut SharedTensor<F>)
                   -> Result<(), Error>;
}

#[derive(Debug, Copy, Clone)]
/// Specifies configuration parameters for a logit operation.
pub struct LogitConfig {
    /// Clamps the input to `[eps, 1 - eps]` before computing.
    ///
    /// Default: None
    pub eps: Option<f32>,
    /// How the backend treats complex input.
    ///
    /// Default: ComplexMode::Jax
    pub complex_mode: ComplexMode,
}

impl ::std::default::Default for LogitConfig {
    fn default() -> LogitConfig {
        LogitConfig {
            eps: None,
            complex_mode: ComplexMode::Jax,
        }
    }
}

#[cfg(feature = "native")]
macro_rules! impl_ops_logit_for {
    ($t:ident, $b:ty) => (
        impl Logit<$t> for $b {
            fn logit(&self,
                     x: &mut SharedTensor<$t>,
                     eps: Option<$t>,
                     complex_mode: ComplexMode,
                     result: &mut SharedTensor<$t>)
                     -> Result<(), Error> {
                match x.add_device(self.device()) { _ => try!(x.sync(self.device())) }
                match result.add_device(self.device()) { _ => () }
                self.logit_plain(x, eps, complex_mode, result)
            }

            fn logit_plain(&self,
                           x: &SharedTensor<$t>,
                           eps: Option<$t>,
                           _complex_mode: ComplexMode,
                           result: &mut SharedTensor<$t>)
                           -> Result<(), Error> {
                native_map1(x, result, self.device(), |v: $t| {
                    let v = match eps {
                        Some(eps) => v.max(eps).min(1.0 - eps),
                        None => v,
                    };
                    (v / (1.0 - v)).ln()
                })
            }
        }
    );
}

#[cfg(feature = "native")]
impl_ops_logit_for!(f32, Backend<Native>);
#[cfg(feature = "native")]
impl_ops_logit_for!(f64, Backend<Native>);
