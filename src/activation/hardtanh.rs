//! Applies the hard hyperbolic tangent, a piecewise linear clamp.
//!
//! Nonlinearity: `y = clamp(x, min_val, max_val)`
//!
//! A cheap saturating alternative to `tanh`: the linear region between
//! `min_val` and `max_val` passes through unchanged and everything outside is
//! clipped to the nearest bound.
use co::error::Error;
use co::tensor::SharedTensor;
#[cfg(feature = "native")]
use co::backend::Backend;
#[cfg(feature = "native")]
use co::frameworks::Native;
#[cfg(feature = "native")]
use util::native_map1;

/// Provides the hardtanh operation of a backend.
pub trait Hardtanh<F> {
    /// Computes the hardtanh over `x`, writing the result into `result`.
    ///
    /// Manages the synchronization of the operand's memory to the backend
    /// device before computing.
    fn hardtanh(&self,
                x: &mut SharedTensor<F>,
                min_val: F,
                max_val: F,
                result: &mut SharedTensor<F>)
                -> Result<(), Error>;

    /// Computes the hardtanh over `x` without any memory management.
    fn hardtanh_plain(&self,
                      x: &SharedTensor<F>,
                      min_val: F,
                      max_val: F,
                      result: &mut SharedTensor<F>)
                      -> Result<(), Error>;
}

#[derive(Debug, Copy, Clone)]
/// Specifies configuration parameters for a hardtanh operation.
pub struct HardtanhConfig {
    /// The lower bound of the linear region.
    ///
    /// Default: -1.0
    pub min_val: f32,
    /// The upper bound of the linear region.
    ///
    /// Default: 1.0
    pub max_val: f32,
}

impl ::std::default::Default for HardtanhConfig {
    fn default() -> HardtanhConfig {
        HardtanhConfig {
            min_val: -1.0,
            max_val: 1.0,
        }
    }
}

#[cfg(feature = "native")]
macro_rules! impl_ops_hardtanh_for {
    ($t:ident, $b:ty) => (
        impl Hardtanh<$t> for $b {
            fn hardtanh(&self,
                        x: &mut SharedTensor<$t>,
                        min_val: $t,
                        max_val: $t,
                        result: &mut SharedTensor<$t>)
                        -> Result<(), Error> {
                match x.add_device(self.device()) { _ => try!(x.sync(self.device())) }
                match result.add_device(self.device()) { _ => () }
                self.hardtanh_plain(x, min_val, max_val, result)
            }

            fn hardtanh_plain(&self,
                              x: &SharedTensor<$t>,
                              min_val: $t,
                              max_val: $t,
                              result: &mut SharedTensor<$t>)
                              -> Result<(), Error> {
                native_map1(x, result, self.device(), |v: $t| {
                    v.max(min_val).min(max_val)
                })
            }
        }
    );
}

#[cfg(feature = "native")]
impl_ops_hardtanh_for!(f32, Backend<Native>);
#[cfg(feature = "native")]
impl_ops_hardtanh_for!(f64, Backend<Native>);
