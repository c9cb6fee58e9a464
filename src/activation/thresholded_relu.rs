//! Applies the rectified linear unit with a custom threshold.
//!
//! Nonlinearity: `y = x for x > threshold, y = 0 otherwise`
//!
//! With the conventional threshold of `0` this is the plain ReLU.
use co::error::Error;
use co::tensor::SharedTensor;
#[cfg(feature = "native")]
use co::backend::Backend;
#[cfg(feature = "native")]
use co::frameworks::Native;
#[cfg(feature = "native")]
use util::native_map1;

/// Provides the thresholded ReLU operation of a backend.
pub trait ThresholdedRelu<F> {
    /// Computes the thresholded ReLU over `x`, writing the result into `result`.
    ///
    /// Manages the synchronization of the operand's memory to the backend
    /// device before computing.
    fn thresholded_relu(&self,
                        x: &mut SharedTensor<F>,
                        threshold: F,
                        result: &mut SharedTensor<F>)
                        -> Result<(), Error>;

    /// Computes the thresholded ReLU over `x` without any memory management.
    fn thresholded_relu_plain(&self,
                              x: &SharedTensor<F>,
                              threshold: F,
                              result: &mut SharedTensor<F>)
                              -> Result<(), Error>;
}

#[derive(Debug, Copy, Clone)]
/// Specifies configuration parameters for a thresholded ReLU operation.
pub struct ThresholdedReluConfig {
    /// The value above which the activation is linear.
    ///
    /// Default: 0.0
    pub threshold: f32,
}

impl ::std::default::Default for ThresholdedReluConfig {
    fn default() -> ThresholdedReluConfig {
        ThresholdedReluConfig { threshold: 0.0 }
    }
}

#[cfg(feature = "native")]
macro_rules! impl_ops_thresholded_relu_for {
    ($t:ident, $b:ty) => (
        impl ThresholdedRelu<$t> for $b {
            fn thresholded_relu(&self,
                                x: &mut SharedTensor<$t>,
                                threshold: $t,
                                result: &mut SharedTensor<$t>)
                                -> Result<(), Error> {
                match x.add_device(self.device()) { _ => try!(x.sync(self.device())) }
                match result.add_device(self.device()) { _ => () }
                self.thresholded_relu_plain(x, threshold, result)
            }

            fn thresholded_relu_plain(&self,
                                      x: &SharedTensor<$t>,
                                      threshold: $t,
                                      result: &mut SharedTensor<$t>)
                                      -> Result<(), Error> {
                native_map1(x, result, self.device(), |v: $t| {
                    if v > threshold { v } else { 0.0 }
                })
            }
        }
    );
}

#[cfg(feature = "native")]
impl_ops_thresholded_relu_for!(f32, Backend<Native>);
#[cfg(feature = "native")]
impl_ops_thresholded_relu_for!(f64, Backend<Native>);
