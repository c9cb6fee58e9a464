//! Provides the backend-agnostic array handle for activation functions.
//!
//! An [Array][array] couples a Collenchyma [SharedTensor][tensor], which
//! holds the actual numeric data, with a backend implementing the
//! [activation capability traits][activation]. The backend is injected at
//! construction; every activation method on the handle is a single
//! call-through to the matching operation of that backend, forwarding the
//! receiver's tensor, the declared parameters and an optional output buffer
//! unchanged.
//!
//! The handle performs no computation, keeps no state between calls and
//! defines no error conditions of its own: whatever the backend operation
//! reports travels to the caller untouched. Shape compatibility between the
//! receiver and a supplied output buffer is likewise the backend's contract,
//! not the handle's.
//!
//! ## Output buffers
//!
//! Each activation method (except [logsigmoid][logsigmoid], which has no
//! output buffer parameter) accepts an `Option<Array<B>>`. Passing
//! `Some(out)` hands that array's tensor to the backend to write into, and
//! the method returns the same handle, mutated. Passing `None` lets the
//! method allocate a fresh array of the receiver's shape on the backend
//! device. Either way the caller gets back exactly the handle the backend
//! wrote into.
//!
//! [array]: ./struct.Array.html
//! [activation]: ../activation/index.html
//! [logsigmoid]: ./struct.Array.html#method.logsigmoid
//! [tensor]: http://autumnai.github.io/collenchyma/collenchyma/tensor/index.html
use std::fmt;
use std::rc::Rc;
use co::backend::IBackend;
use co::error::Error;
use co::tensor::SharedTensor;
use activation::*;

/// A handle over a numeric tensor, bound to an injected backend.
pub struct Array<B: IBackend> {
    backend: Rc<B>,
    data: SharedTensor<f32>,
}

impl<B: IBackend> Array<B> {
    /// Create a new array of the given shape, allocated on the backend device.
    ///
    /// The contents are uninitialized; use
    /// [util::write_to_memory][write] to fill them.
    /// [write]: ../util/fn.write_to_memory.html
    pub fn new(backend: Rc<B>, shape: &[usize]) -> Result<Array<B>, Error> {
        debug!("allocating array of shape {:?}", shape);
        let data = try!(SharedTensor::<f32>::new(backend.device(), &shape.to_vec()));
        Ok(Array {
            backend: backend,
            data: data,
        })
    }

    /// Create an array over an existing tensor.
    pub fn from_tensor(backend: Rc<B>, data: SharedTensor<f32>) -> Array<B> {
        Array {
            backend: backend,
            data: data,
        }
    }

    /// The shape of the array.
    pub fn desc(&self) -> &[usize] {
        self.data.desc()
    }

    /// The underlying tensor.
    pub fn data(&self) -> &SharedTensor<f32> {
        &self.data
    }

    /// The underlying tensor, mutably.
    pub fn data_mut(&mut self) -> &mut SharedTensor<f32> {
        &mut self.data
    }

    /// Unwrap the handle into its underlying tensor.
    pub fn into_data(self) -> SharedTensor<f32> {
        self.data
    }

    /// The injected backend.
    pub fn backend(&self) -> &Rc<B> {
        &self.backend
    }

    /// Resolve the output buffer for an operation: the supplied one, or a
    /// freshly allocated array of the receiver's shape.
    fn or_empty(&self, out: Option<Array<B>>) -> Result<Array<B>, Error> {
        match out {
            Some(out) => Ok(out),
            None => self.empty_like(),
        }
    }

    fn empty_like(&self) -> Result<Array<B>, Error> {
        let shape = self.data.desc().clone();
        let data = try!(SharedTensor::<f32>::new(self.backend.device(), &shape));
        Ok(Array {
            backend: self.backend.clone(),
            data: data,
        })
    }

    /// Computes the elementwise logit of the array.
    ///
    /// Forwards the tensor, the configured `eps` clamp and complex mode, and
    /// the output buffer to the backend [Logit][1] operation.
    /// [1]: ../activation/trait.Logit.html
    ///
    /// Without an `eps` clamp, input at the domain boundary produces
    /// infinities and input outside `[0, 1]` produces NaN; see the operation
    /// documentation.
    pub fn logit(&mut self, config: &LogitConfig, out: Option<Array<B>>) -> Result<Array<B>, Error>
        where B: Logit<f32>
    {
        let mut out = try!(self.or_empty(out));
        try!(self.backend.logit(&mut self.data, config.eps, config.complex_mode, &mut out.data));
        Ok(out)
    }

    /// Computes the elementwise ReLU with a custom threshold.
    ///
    /// Forwards the tensor, the configured threshold and the output buffer to
    /// the backend [ThresholdedRelu][1] operation.
    /// [1]: ../activation/trait.ThresholdedRelu.html
    pub fn thresholded_relu(&mut self,
                            config: &ThresholdedReluConfig,
                            out: Option<Array<B>>)
                            -> Result<Array<B>, Error>
        where B: ThresholdedRelu<f32>
    {
        let mut out = try!(self.or_empty(out));
        try!(self.backend.thresholded_relu(&mut self.data, config.threshold, &mut out.data));
        Ok(out)
    }

    /// Computes the elementwise PReLU with the given slope tensor.
    ///
    /// The slope is a required operand, not a configuration value. A
    /// one-element slope (see [util::native_scalar][scalar]) applies
    /// everywhere; how larger slope tensors broadcast against the input is
    /// the backend's contract.
    ///
    /// Forwards both tensors and the output buffer to the backend [Prelu][1]
    /// operation.
    /// [1]: ../activation/trait.Prelu.html
    /// [scalar]: ../util/fn.native_scalar.html
    pub fn prelu(&mut self,
                 slope: &mut SharedTensor<f32>,
                 out: Option<Array<B>>)
                 -> Result<Array<B>, Error>
        where B: Prelu<f32>
    {
        let mut out = try!(self.or_empty(out));
        try!(self.backend.prelu(&mut self.data, slope, &mut out.data));
        Ok(out)
    }

    /// Computes the elementwise ReLU capped at 6.
    ///
    /// Forwards the tensor, the configured complex mode and the output buffer
    /// to the backend [Relu6][1] operation.
    /// [1]: ../activation/trait.Relu6.html
    pub fn relu6(&mut self, config: &Relu6Config, out: Option<Array<B>>) -> Result<Array<B>, Error>
        where B: Relu6<f32>
    {
        let mut out = try!(self.or_empty(out));
        try!(self.backend.relu6(&mut self.data, config.complex_mode, &mut out.data));
        Ok(out)
    }

    /// Computes the elementwise log-sigmoid.
    ///
    /// This operation takes no output buffer; the result is always written
    /// into a freshly allocated array of the receiver's shape.
    ///
    /// Forwards the tensor and the configured complex mode to the backend
    /// [LogSigmoid][1] operation.
    /// [1]: ../activation/trait.LogSigmoid.html
    pub fn logsigmoid(&mut self, config: &LogSigmoidConfig) -> Result<Array<B>, Error>
        where B: LogSigmoid<f32>
    {
        let mut out = try!(self.empty_like());
        try!(self.backend.logsigmoid(&mut self.data, config.complex_mode, &mut out.data));
        Ok(out)
    }

    /// Computes the elementwise SELU.
    ///
    /// Forwards the tensor and the output buffer to the backend [Selu][1]
    /// operation. SELU has no parameters; its constants are fixed.
    /// [1]: ../activation/trait.Selu.html
    pub fn selu(&mut self, out: Option<Array<B>>) -> Result<Array<B>, Error>
        where B: Selu<f32>
    {
        let mut out = try!(self.or_empty(out));
        try!(self.backend.selu(&mut self.data, &mut out.data));
        Ok(out)
    }

    /// Computes the elementwise SiLU.
    ///
    /// Forwards the tensor and the output buffer to the backend [Silu][1]
    /// operation.
    /// [1]: ../activation/trait.Silu.html
    pub fn silu(&mut self, out: Option<Array<B>>) -> Result<Array<B>, Error>
        where B: Silu<f32>
    {
        let mut out = try!(self.or_empty(out));
        try!(self.backend.silu(&mut self.data, &mut out.data));
        Ok(out)
    }

    /// Computes the elementwise ELU.
    ///
    /// Forwards the tensor, the configured `alpha` and the output buffer to
    /// the backend [Elu][1] operation.
    /// [1]: ../activation/trait.Elu.html
    pub fn elu(&mut self, config: &EluConfig, out: Option<Array<B>>) -> Result<Array<B>, Error>
        where B: Elu<f32>
    {
        let mut out = try!(self.or_empty(out));
        try!(self.backend.elu(&mut self.data, config.alpha, &mut out.data));
        Ok(out)
    }

    /// Computes the elementwise hardtanh.
    ///
    /// Forwards the tensor, the configured linear region bounds and the
    /// output buffer to the backend [Hardtanh][1] operation.
    /// [1]: ../activation/trait.Hardtanh.html
    pub fn hardtanh(&mut self,
                    config: &HardtanhConfig,
                    out: Option<Array<B>>)
                    -> Result<Array<B>, Error>
        where B: Hardtanh<f32>
    {
        let mut out = try!(self.or_empty(out));
        try!(self.backend.hardtanh(&mut self.data, config.min_val, config.max_val, &mut out.data));
        Ok(out)
    }

    /// Computes the elementwise tanh shrink.
    ///
    /// Forwards the tensor and the output buffer to the backend
    /// [Tanhshrink][1] operation.
    /// [1]: ../activation/trait.Tanhshrink.html
    pub fn tanhshrink(&mut self, out: Option<Array<B>>) -> Result<Array<B>, Error>
        where B: Tanhshrink<f32>
    {
        let mut out = try!(self.or_empty(out));
        try!(self.backend.tanhshrink(&mut self.data, &mut out.data));
        Ok(out)
    }

    /// Computes the elementwise CELU.
    ///
    /// Forwards the tensor, the configured `alpha` and complex mode, and the
    /// output buffer to the backend [Celu][1] operation.
    /// [1]: ../activation/trait.Celu.html
    pub fn celu(&mut self, config: &CeluConfig, out: Option<Array<B>>) -> Result<Array<B>, Error>
        where B: Celu<f32>
    {
        let mut out = try!(self.or_empty(out));
        try!(self.backend.celu(&mut self.data, config.alpha, config.complex_mode, &mut out.data));
        Ok(out)
    }
}

impl<B: IBackend> fmt::Debug for Array<B> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Array {{ shape: {:?} }}", self.data.desc())
    }
}
