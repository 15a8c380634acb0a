//! Core object model types shared by the native runtime.
//!
//! This crate contains the pieces every object kind builds on:
//! - `ObjectHeader` / `ObjectRef` - C-compatible object prefix and raw handle
//! - `TypeDescriptor` / `TypeRegistry` - type identity used for O(1) checks
//! - `refcount` - the acquire/release primitive, with the immortal floor
//! - `Integral` - integral inputs accepted by truthiness conversions
//! - `RuntimeConfig` - runtime options, installed once per process

pub mod config;
pub mod error;
pub mod integral;
pub mod object;
pub mod refcount;
pub mod types;

pub use config::{RuntimeConfig, UnderflowPolicy};
pub use error::{ObjectError, ObjectResult};
pub use integral::Integral;
pub use object::{ObjectHeader, ObjectRef};
pub use refcount::IMMORTAL_FLOOR;
pub use types::{BOOL_TYPE, TypeDescriptor, TypeFlags, TypeRegistry};
