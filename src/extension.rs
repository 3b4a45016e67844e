//! Optional vendor extension reporting chain membership of a device.
//!
//! The extension is absent on most platforms and driver versions. Every way
//! of not getting a mask is an ordinary outcome here, never an error for
//! the caller.

use std::convert::Infallible;
use std::fmt;
use tracing::{debug, trace};
use crate::error::ExtensionError;
use crate::identity::GpuMask;

/// Vendor extension version.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExtVersion {
    pub major: u32,
    pub minor: u32,
}

impl ExtVersion {
    pub fn new(major: u32, minor: u32) -> ExtVersion {
        ExtVersion { major, minor }
    }

    /// A major version of zero means no usable extension even when the
    /// context was created.
    pub fn is_present(&self) -> bool {
        self.major != 0
    }
}

impl fmt::Display for ExtVersion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Locates the vendor extension and binds a context to `D`.
///
/// One implementation exists per target platform. `try_load` returns `None`
/// if the extension module is not loaded in the process, its factory entry
/// point is missing or the factory fails.
pub trait VendorExtensionLocator<D: ?Sized> {
    type Context: ExtensionContext;

    fn try_load(&self, device: &D) -> Option<Self::Context>;
}

/// An extension context bound to one device. Released on drop.
pub trait ExtensionContext {
    type ClInterop: ClInteropExtension;

    fn version(&self) -> Result<ExtVersion, ExtensionError>;

    /// Acquires the compute interop sub-interface, if supported.
    fn cl_interop(&self) -> Option<Self::ClInterop>;
}

/// The compute interop sub-interface. Released on drop.
pub trait ClInteropExtension {
    fn query_interop_gpu_mask(&self) -> GpuMask;
}

/// A locator for platforms and configurations without the extension.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoExtension;

impl<D: ?Sized> VendorExtensionLocator<D> for NoExtension {
    type Context = Infallible;

    fn try_load(&self, _device: &D) -> Option<Infallible> {
        None
    }
}

impl ExtensionContext for Infallible {
    type ClInterop = Infallible;

    fn version(&self) -> Result<ExtVersion, ExtensionError> {
        match *self {}
    }

    fn cl_interop(&self) -> Option<Infallible> {
        match *self {}
    }
}

impl ClInteropExtension for Infallible {
    fn query_interop_gpu_mask(&self) -> GpuMask {
        match *self {}
    }
}

/// Retrieves the chain membership mask of `device` through the vendor
/// extension, or `None` if it is unavailable for any reason.
///
/// The sub-interface is released before the context.
pub fn query_gpu_mask<L, D>(locator: &L, device: &D) -> Option<GpuMask>
where
    L: VendorExtensionLocator<D> + ?Sized,
    D: ?Sized,
{
    let context = match locator.try_load(device) {
        Some(context) => context,
        None => {
            debug!("vendor extension not available");
            return None;
        }
    };

    match context.version() {
        Ok(version) if version.is_present() => {
            trace!(%version, "vendor extension loaded");
        }
        Ok(version) => {
            debug!(%version, "vendor extension reports major version zero");
            return None;
        }
        Err(err) => {
            debug!(error = %err, "vendor extension version query failed");
            return None;
        }
    }

    let cl_interop = match context.cl_interop() {
        Some(cl_interop) => cl_interop,
        None => {
            debug!("vendor extension exposes no compute interop interface");
            return None;
        }
    };

    let mask = cl_interop.query_interop_gpu_mask();
    trace!(%mask, "vendor extension chain mask");
    drop(cl_interop);
    Some(mask)
}
