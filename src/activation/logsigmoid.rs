//! Applies the logarithm of the standard logistic function.
//!
//! Nonlinearity: `y = -ln(1 + e^(-x))`
//!
//! Computing the logistic function first and taking the logarithm afterwards
//! underflows for large negative input; the native implementation therefore
//! evaluates the equivalent `-softplus(-x)` with the numerically stable
//! softplus `softplus(t) = max(t, 0) + ln(1 + e^(-|t|))`.
use co::error::Error;
use co::tensor::SharedTensor;
use activation::ComplexMode;
#[cfg(feature = "native")]
use co::backend::Backend;
#[cfg(feature = "native")]
use co::frameworks::Native;
#[cfg(feature = "native")]
use util::native_map1;

/// Provides the log-sigmoid operation of a backend.
pub trait LogSigmoid<F> {
    /// Computes the log-sigmoid over `x`, writing the result into `result`.
    ///
    /// Manages the synchronization of the operand's memory to the backend
    /// device before computing.
    fn logsigmoid(&self,
                  x: &mut SharedTensor<F>,
                  complex_mode: ComplexMode,
                  result: &mut SharedTensor<F>)
                  -> Result<(), Error>;

    /// Computes the log-sigmoid over `x` without any memory management.
    fn logsigmoid_plain(&self,
                        x: &SharedTensor<F>,
                        complex_mode: ComplexMode,
                        result: &mut SharedTensor<F>)
                        -> Result<(), Error>;
}

#[derive(Debug, Copy, Clone)]
/// Specifies configuration parameters for a log-sigmoid operation.
pub struct LogSigmoidConfig {
    /// How the backend treats complex input.
    ///
    /// Default: ComplexMode::Jax
    pub complex_mode: ComplexMode,
}

impl ::std::default::Default for LogSigmoidConfig {
    fn default() -> LogSigmoidConfig {
        LogSigmoidConfig { complex_mode: ComplexMode::Jax }
    }
}

#[cfg(feature = "native")]
macro_rules! impl_ops_logsigmoid_for {
    ($t:ident, $b:ty) => (
        impl LogSigmoid<$t> for $b {
            fn logsigmoid(&self,
                          x: &mut SharedTensor<$t>,
                          complex_mode: ComplexMode,
                          result: &mut SharedTensor<$t>)
                          -> Result<(), Error> {
                match x.add_device(self.device()) { _ => try!(x.sync(self.device())) }
                match result.add_device(self.device()) { _ => () }
                self.logsigmoid_plain(x, complex_mode, result)
            }

            fn logsigmoid_plain(&self,
                                x: &SharedTensor<$t>,
                                _complex_mode: ComplexMode,
                                result: &mut SharedTensor<$t>)
                                -> Result<(), Error> {
                native_map1(x, result, self.device(), |v: $t| {
                    let t = -v;
                    -(t.max(0.0) + (-t.abs()).exp().ln_1p())
                })
            }
        }
    );
}

#[cfg(feature = "native")]
impl_ops_logsigmoid_for!(f32, Backend<Native>);
#[cfg(feature = "native")]
impl_ops_logsigmoid_for!(f64, Backend<Native>);
