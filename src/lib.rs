//! Turgor provides backend-agnostic, elementwise activation functions on top of the
//! high-performance computation Framework [Collenchyma][collenchyma]. It plays the
//! same role for activation functions that other Collenchyma plugins play for BLAS
//! or Neural Network primitives: it defines the operations once and lets any
//! capable backend carry them out, so the same code can run on servers, desktops
//! or mobiles against whatever computation hardware is available.
//!
//! ## Architecture
//!
//! Turgor splits into three small parts:
//!
//! * [__Activation operations__][activation]</br>
//! One capability trait per activation function (`logit`, `thresholded_relu`,
//! `prelu`, `relu6`, `logsigmoid`, `selu`, `silu`, `elu`, `hardtanh`,
//! `tanhshrink`, `celu`). A backend advertises support for an activation by
//! implementing its trait. Every operation comes in two flavours, following the
//! Collenchyma plugin convention: a managed variant that synchronizes the
//! operand's memory to the backend device before computing, and a `_plain`
//! variant that performs no memory management at all.
//!
//! * [__Native implementations__][activation]</br>
//! Implementations of all capability traits for the native host CPU backend,
//! available behind the `native` feature (enabled by default). These hold the
//! actual numeric formulas; nothing above this layer computes anything.
//!
//! * [__Array facade__][array]</br>
//! A thin handle coupling a Collenchyma [SharedTensor][tensor] with an injected
//! backend. Each activation is exposed as an instance method whose body is a
//! single call-through to the matching backend operation, forwarding the
//! receiver's tensor, the declared parameters and an optional output buffer
//! unchanged. The facade owns no formulas, no state machine and no error
//! taxonomy; whatever the backend reports is what the caller sees.
//!
//! ## Examples
//!
//! ```
//! # extern crate turgor;
//! # use turgor::activation::EluConfig;
//! # fn main() {
//! # let _ = EluConfig::default();
//! # }
//! ```
//!
//! [collenchyma]: https://github.com/autumnai/collenchyma
//! [activation]: ./activation/index.html
//! [array]: ./array/index.html
//! [tensor]: http://autumnai.github.io/collenchyma/collenchyma/tensor/index.html
#![allow(dead_code)]
#![deny(missing_docs,
        missing_debug_implementations, missing_copy_implementations,
        trivial_casts, trivial_numeric_casts,
        unsafe_code,
        unused_import_braces, unused_qualifications)]

// used when run with  cargo test --no-run --features clippy
// or cargo build --features clippy
#![cfg_attr(feature="clippy", feature(plugin))]
#![cfg_attr(feature="clippy", plugin(clippy))]
#![cfg_attr(feature="clippy", deny(clippy, clippy_pedantic))]

#[macro_use]
extern crate log;
extern crate collenchyma as co;

pub mod activation;
pub mod array;
pub mod util;
