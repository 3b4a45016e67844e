//! Raw ABI definitions used by the PAL device layer.
//!
//! Nothing in here has behavior. See the `pal-interop` crate for the typed
//! and safe interfaces built on top of these.

pub mod command_utils_h;
pub mod dxx_ext_h;

pub use crate::command_utils_h::*;
pub use crate::dxx_ext_h::*;
