//! Provides common utility functions
use co::backend::{Backend, BackendConfig};
use co::device::DeviceType;
use co::error::Error;
use co::framework::IFramework;
use co::frameworks::Native;
use co::memory::MemoryType;
use co::plugin::Error as PluginError;
use co::plugin::numeric_helpers::Float;
use co::tensor::{ITensorDesc, SharedTensor};
use activation::*;

/// Create a simple native backend.
///
/// This is handy when you need to sync data to host memory to read/write it.
pub fn native_backend() -> Backend<Native> {
    let framework = Native::new();
    let hardwares = &framework.hardwares().to_vec();
    let backend_config = BackendConfig::new(framework, hardwares);
    Backend::new(backend_config).unwrap()
}

/// Write into a native Collenchyma Memory.
pub fn write_to_memory<T: ::std::marker::Copy>(mem: &mut MemoryType, data: &[T]) {
    match mem {
        &mut MemoryType::Native(ref mut mem) => {
            let mut mem_buffer = mem.as_mut_slice::<T>();
            for (index, datum) in data.iter().enumerate() {
                mem_buffer[index] = *datum;
            }
        },
        #[cfg(any(feature = "opencl", feature = "cuda"))]
        _ => {}
    }
}

/// Create a Collenchyma SharedTensor for a scalar value.
pub fn native_scalar<T: ::std::marker::Copy>(scalar: T) -> SharedTensor<T> {
    let native = native_backend();
    let mut shared_scalar = SharedTensor::<T>::new(native.device(), &vec![1]).unwrap();
    write_to_memory(shared_scalar.get_mut(native.device()).unwrap(), &[scalar]);

    shared_scalar
}

/// Read the native memory of a tensor on `device` as a slice.
fn read_native<T: Float>(tensor: &SharedTensor<T>,
                         device: &DeviceType,
                         operand: &'static str)
                         -> Result<Vec<T>, Error> {
    let mem = match tensor.get(device) {
        Some(mem) => mem,
        None => return Err(Error::Plugin(PluginError::MissingMemoryForDevice(operand))),
    };
    match mem.as_native() {
        Some(native_mem) => Ok(native_mem.as_slice::<T>().to_vec()),
        None => Err(Error::Plugin(PluginError::MissingMemoryForDevice(operand))),
    }
}

/// Maps a unary function over the native memory of `x`, writing into `result`.
///
/// Expects the memory of both tensors to be resolvable on `device`; fails with
/// a plugin error otherwise. The sizes of `x` and `result` must agree.
pub fn native_map1<T, F>(x: &SharedTensor<T>,
                         result: &mut SharedTensor<T>,
                         device: &DeviceType,
                         op: F)
                         -> Result<(), Error>
    where T: Float,
          F: Fn(T) -> T
{
    if x.desc().size() != result.desc().size() {
        return Err(Error::Plugin(PluginError::Operation("the size of `result` does not match the size of `x`")));
    }
    let input = try!(read_native(x, device, "Unable to resolve native memory for `x`"));
    let result_mem = match result.get_mut(device) {
        Some(mem) => mem,
        None => return Err(Error::Plugin(PluginError::MissingMemoryForDevice("Unable to resolve native memory for `result`"))),
    };
    match result_mem {
        &mut MemoryType::Native(ref mut mem) => {
            let mut result_slice = mem.as_mut_slice::<T>();
            for (index, v) in input.iter().enumerate() {
                result_slice[index] = op(*v);
            }
            Ok(())
        },
        #[cfg(any(feature = "opencl", feature = "cuda"))]
        _ => Err(Error::Plugin(PluginError::MissingMemoryForDevice("Unable to resolve native memory for `result`"))),
    }
}

/// Maps a binary function over the native memory of `x` and a second operand
/// tiled over it, writing into `result`.
///
/// The second operand either holds a single element, which is applied
/// everywhere, or its size must evenly divide the size of `x`, in which case
/// it cycles over the flattened input (a unidirectional broadcast over the
/// trailing dimensions). Any other size fails with a plugin error.
pub fn native_map2<T, F>(x: &SharedTensor<T>,
                         operand: &SharedTensor<T>,
                         result: &mut SharedTensor<T>,
                         device: &DeviceType,
                         op: F)
                         -> Result<(), Error>
    where T: Float,
          F: Fn(T, T) -> T
{
    let len = x.desc().size();
    if result.desc().size() != len {
        return Err(Error::Plugin(PluginError::Operation("the size of `result` does not match the size of `x`")));
    }
    let operand_len = operand.desc().size();
    if operand_len == 0 || len % operand_len != 0 {
        return Err(Error::Plugin(PluginError::Operation("the second operand does not tile the input")));
    }
    let input = try!(read_native(x, device, "Unable to resolve native memory for `x`"));
    let tiled = try!(read_native(operand, device, "Unable to resolve native memory for the second operand"));
    let result_mem = match result.get_mut(device) {
        Some(mem) => mem,
        None => return Err(Error::Plugin(PluginError::MissingMemoryForDevice("Unable to resolve native memory for `result`"))),
    };
    match result_mem {
        &mut MemoryType::Native(ref mut mem) => {
            let mut result_slice = mem.as_mut_slice::<T>();
            for (index, v) in input.iter().enumerate() {
                result_slice[index] = op(*v, tiled[index % operand_len]);
            }
            Ok(())
        },
        #[cfg(any(feature = "opencl", feature = "cuda"))]
        _ => Err(Error::Plugin(PluginError::MissingMemoryForDevice("Unable to resolve native memory for `result`"))),
    }
}

/// Encapsulates all activation operations a backend can provide.
pub trait ActivationOps<F: Float> : Logit<F> + ThresholdedRelu<F> + Prelu<F> + Relu6<F>
                                  + LogSigmoid<F> + Selu<F> + Silu<F> + Elu<F> + Hardtanh<F>
                                  + Tanhshrink<F> + Celu<F> {}

impl<T: Logit<f32> + ThresholdedRelu<f32> + Prelu<f32> + Relu6<f32> + LogSigmoid<f32> + Selu<f32>
      + Silu<f32> + Elu<f32> + Hardtanh<f32> + Tanhshrink<f32> + Celu<f32>> ActivationOps<f32> for T {}
