//! Direct3D 11 / compute device interoperability matching.
//!
//! Decides whether an externally created `ID3D11Device` can share resources
//! with a local compute device. Both must sit on the same physical adapter
//! (same LUID). On linked multi-GPU adapters the local device's chain
//! position must also be spanned by the D3D11 device, which is confirmed
//! through the AMD DXX driver extension when it is present.
//!
//! ```
//! use pal_interop::{InteropAdapterMatcher, LocalDeviceIdentity, Luid, NoExtension};
//!
//! let matcher = InteropAdapterMatcher::new(NoExtension);
//! let identity = LocalDeviceIdentity::new(Luid::new(0x0, 0x1d2f3), 0);
//! # let _ = (matcher, identity);
//! ```
//!
//! The platform glue lives in `platform`: on Windows the `windows` crate's
//! D3D11/DXGI interfaces implement the introspection traits and
//! `DxxExtensionLocator` finds the driver extension. Everywhere else
//! `associate_d3d11_device` always returns false.
//!
//! The `stream` module carries the command identifiers of the
//! command-submission layer.

#[macro_use]
extern crate enum_primitive;

pub mod config;
mod error;
pub mod extension;
mod identity;
pub mod introspect;
mod matcher;
pub mod platform;
pub mod stream;
#[cfg(test)]
mod tests;

pub use crate::config::{default_extension_policy, ExtensionPolicy};
pub use crate::error::{ConfigError, Error, ExtensionError, Result, TraversalError, TraversalStage};
pub use crate::extension::{query_gpu_mask, ClInteropExtension, ExtVersion, ExtensionContext,
    NoExtension, VendorExtensionLocator};
pub use crate::identity::{AdapterDescriptor, ChainBit, GpuMask, LocalDeviceIdentity, Luid};
pub use crate::introspect::{adapter_descriptor, GraphicsAdapter, GraphicsDevice, InteropDevice};
pub use crate::matcher::{InteropAdapterMatcher, MatchVerdict, Mismatch};
pub use crate::platform::associate_d3d11_device;
pub use crate::stream::{GlSharingProperty, StreamCommandType, StreamWaitCondition};
pub use pal_sys as sys;
