//! The two boolean singletons and the handle protocol around them.
//!
//! `True` and `False` are immortal objects living in static storage. Native
//! callers get raw pointers through [`capi`]; Rust callers get counted
//! [`BoolRef`] handles whose claims are released on drop.

#[macro_use]
mod macros;

pub mod capi;
pub mod diag;
pub mod handle;
pub mod registry;

pub use diag::{RefCountReport, report};
pub use handle::{BoolRef, acquire, from_bool, from_truth, is_bool, release};
pub use registry::{BoolObject, FALSE, TRUE, initialize, initialize_with, py_false, py_true};
