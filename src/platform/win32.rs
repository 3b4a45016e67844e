//! Direct3D 11 / DXGI introspection and the DXX extension locator.

use std::ffi::c_void;
use std::mem;
use std::ptr::{self, NonNull};
use tracing::{trace, warn};
use windows::core::{Interface, PCSTR};
use windows::Win32::Graphics::Direct3D11::ID3D11Device;
use windows::Win32::Graphics::Dxgi::{IDXGIAdapter, IDXGIDevice};
use windows::Win32::System::LibraryLoader::{GetModuleHandleA, GetProcAddress};
use pal_sys::{
    AmdDxExtVersion, IAmdDxExt, IAmdDxExtCLInterop, IAmdDxExtCLInteropVtbl, IAmdDxExtInterface,
    IAmdDxExtVtbl, PFNAmdDxExtCreate11,
};
use crate::config::{self, ExtensionPolicy};
use crate::error::{ExtensionError, TraversalError, TraversalStage};
use crate::extension::{ClInteropExtension, ExtVersion, ExtensionContext, NoExtension,
    VendorExtensionLocator};
use crate::identity::{AdapterDescriptor, GpuMask, LocalDeviceIdentity, Luid};
use crate::introspect::{GraphicsAdapter, GraphicsDevice, InteropDevice};
use crate::matcher::InteropAdapterMatcher;

fn traversal_error(stage: TraversalStage, err: windows::core::Error) -> TraversalError {
    TraversalError::new(stage, format!("{} ({:#010x})", err.message(), err.code().0))
}

impl GraphicsDevice for ID3D11Device {
    type InteropDevice = IDXGIDevice;

    fn interop_device(&self) -> Result<IDXGIDevice, TraversalError> {
        self.cast::<IDXGIDevice>()
            .map_err(|err| traversal_error(TraversalStage::InteropDevice, err))
    }
}

impl InteropDevice for IDXGIDevice {
    type Adapter = IDXGIAdapter;

    fn adapter(&self) -> Result<IDXGIAdapter, TraversalError> {
        unsafe { self.GetAdapter() }.map_err(|err| traversal_error(TraversalStage::Adapter, err))
    }
}

impl GraphicsAdapter for IDXGIAdapter {
    fn descriptor(&self) -> Result<AdapterDescriptor, TraversalError> {
        let desc = unsafe { self.GetDesc() }
            .map_err(|err| traversal_error(TraversalStage::Descriptor, err))?;

        Ok(AdapterDescriptor::new(Luid::new(
            desc.AdapterLuid.HighPart as u32,
            desc.AdapterLuid.LowPart,
        )))
    }
}

/// Finds the DXX driver extension among the modules already loaded into
/// the process.
#[derive(Clone, Copy, Debug, Default)]
pub struct DxxExtensionLocator;

impl VendorExtensionLocator<ID3D11Device> for DxxExtensionLocator {
    type Context = DxxExtension;

    fn try_load(&self, device: &ID3D11Device) -> Option<DxxExtension> {
        let module = match unsafe { GetModuleHandleA(PCSTR(pal_sys::DXX_MODULE_NAME.as_ptr())) } {
            Ok(module) => module,
            Err(_) => {
                trace!("DXX module not loaded");
                return None;
            }
        };

        let create = match unsafe {
            GetProcAddress(module, PCSTR(pal_sys::AMD_DX_EXT_CREATE11_NAME.as_ptr()))
        } {
            Some(create) => create,
            None => {
                trace!("DXX module exports no AmdDxExtCreate11");
                return None;
            }
        };

        let create: PFNAmdDxExtCreate11 = unsafe { mem::transmute(create) };
        let mut ext: *mut IAmdDxExt = ptr::null_mut();
        let hr = unsafe { create(device.as_raw(), &mut ext) };

        if hr < 0 {
            trace!(hr, "AmdDxExtCreate11 failed");
            return None;
        }

        NonNull::new(ext).map(|ext| DxxExtension { ext })
    }
}

/// An owned `IAmdDxExt` reference.
#[derive(Debug)]
pub struct DxxExtension {
    ext: NonNull<IAmdDxExt>,
}

impl DxxExtension {
    fn vtbl(&self) -> &IAmdDxExtVtbl {
        unsafe { &*(*self.ext.as_ptr()).lpVtbl }
    }
}

impl ExtensionContext for DxxExtension {
    type ClInterop = DxxClInterop;

    fn version(&self) -> Result<ExtVersion, ExtensionError> {
        let mut version = AmdDxExtVersion::default();
        let hr = unsafe { (self.vtbl().GetVersion)(self.ext.as_ptr(), &mut version) };

        if hr < 0 {
            Err(ExtensionError::VersionQuery { code: hr })
        } else {
            Ok(ExtVersion::new(version.majorVersion, version.minorVersion))
        }
    }

    fn cl_interop(&self) -> Option<DxxClInterop> {
        let iface = unsafe {
            (self.vtbl().GetExtInterface)(self.ext.as_ptr(), pal_sys::AMD_DX_EXT_CL_INTEROP_ID)
        };

        NonNull::new(iface as *mut IAmdDxExtCLInterop).map(|iface| DxxClInterop { iface })
    }
}

impl Drop for DxxExtension {
    fn drop(&mut self) {
        unsafe {
            (self.vtbl().base.Release)(self.ext.as_ptr() as *mut IAmdDxExtInterface);
        }
    }
}

/// An owned `IAmdDxExtCLInterop` reference.
#[derive(Debug)]
pub struct DxxClInterop {
    iface: NonNull<IAmdDxExtCLInterop>,
}

impl DxxClInterop {
    fn vtbl(&self) -> &IAmdDxExtCLInteropVtbl {
        unsafe { &*(*self.iface.as_ptr()).lpVtbl }
    }
}

impl ClInteropExtension for DxxClInterop {
    fn query_interop_gpu_mask(&self) -> GpuMask {
        let mut mask = 0;
        unsafe { (self.vtbl().QueryInteropGpuMask)(self.iface.as_ptr(), &mut mask) };
        GpuMask::new(mask)
    }
}

impl Drop for DxxClInterop {
    fn drop(&mut self) {
        unsafe {
            (self.vtbl().base.Release)(self.iface.as_ptr() as *mut IAmdDxExtInterface);
        }
    }
}

fn extension_policy() -> ExtensionPolicy {
    config::default_extension_policy().unwrap_or_else(|err| {
        warn!(error = %err, "ignoring invalid extension policy");
        ExtensionPolicy::default()
    })
}

/// Returns true if the `ID3D11Device` pointed to by `d3d11_device` can
/// interoperate with the local device described by `identity`.
///
/// A null pointer is never interoperable.
///
/// ### Safety
///
/// `d3d11_device` must be null or point to a live `ID3D11Device` for the
/// duration of the call.
pub unsafe fn associate_d3d11_device(d3d11_device: *mut c_void, identity: &LocalDeviceIdentity) -> bool {
    let device = match ID3D11Device::from_raw_borrowed(&d3d11_device) {
        Some(device) => device,
        None => return false,
    };

    match extension_policy() {
        ExtensionPolicy::Probe => {
            InteropAdapterMatcher::new(DxxExtensionLocator).can_interoperate(device, identity)
        }
        ExtensionPolicy::Skip => {
            InteropAdapterMatcher::new(NoExtension).can_interoperate(device, identity)
        }
    }
}
