//! AMD DXX (Direct3D driver extension) interfaces.
//!
//! Only the leading part of each vtable is declared: the entries the CL
//! interop path calls, in declaration order. Never index past them.
//!
//! The interfaces are plain C++ abstract classes (not COM), so their member
//! functions use `thiscall` on 32-bit x86 and the C convention elsewhere.
//! Layout follows `AmdDxExtIface.h`: `AddRef`, `Release`, then the virtual
//! destructor, then the members of each derived interface.

#![allow(non_camel_case_types, non_snake_case, dead_code)]

use libc::{c_uint, c_ulong, c_void};

pub type HRESULT = i32;

pub const S_OK: HRESULT = 0;
pub const E_FAIL: HRESULT = 0x8000_4005_u32 as HRESULT;

/// The driver module carrying the extension. It is looked up among already
/// loaded modules, never loaded on demand.
#[cfg(target_pointer_width = "64")]
pub const DXX_MODULE_NAME: &[u8] = b"atidxx64.dll\0";
#[cfg(not(target_pointer_width = "64"))]
pub const DXX_MODULE_NAME: &[u8] = b"atidxx32.dll\0";

/// Exported factory creating an `IAmdDxExt` for a D3D11 device.
pub const AMD_DX_EXT_CREATE11_NAME: &[u8] = b"AmdDxExtCreate11\0";

/// `GetExtInterface` identifier of the OpenCL interop sub-interface.
pub const AMD_DX_EXT_CL_INTEROP_ID: c_uint = 8;

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AmdDxExtVersion {
    pub majorVersion: c_uint,
    pub minorVersion: c_uint,
}

/// `HRESULT AmdDxExtCreate11(ID3D11Device*, IAmdDxExt**)`
pub type PFNAmdDxExtCreate11 =
    unsafe extern "C" fn(pDevice: *mut c_void, ppExt: *mut *mut IAmdDxExt) -> HRESULT;

macro_rules! member_fn {
    ($name:ident, fn($($arg:ident: $ty:ty),*) -> $ret:ty) => {
        #[cfg(target_arch = "x86")]
        pub type $name = unsafe extern "thiscall" fn($($arg: $ty),*) -> $ret;
        #[cfg(not(target_arch = "x86"))]
        pub type $name = unsafe extern "C" fn($($arg: $ty),*) -> $ret;
    };
}

member_fn!(AddRef_fn, fn(this: *mut IAmdDxExtInterface) -> c_ulong);
member_fn!(Release_fn, fn(this: *mut IAmdDxExtInterface) -> c_ulong);
member_fn!(Destructor_fn, fn(this: *mut IAmdDxExtInterface, flags: c_uint) -> *mut c_void);
member_fn!(GetVersion_fn, fn(this: *mut IAmdDxExt, pExtVer: *mut AmdDxExtVersion) -> HRESULT);
member_fn!(GetExtInterface_fn, fn(this: *mut IAmdDxExt, iface: c_uint) -> *mut IAmdDxExtInterface);
member_fn!(QueryInteropGpuMask_fn, fn(this: *mut IAmdDxExtCLInterop, pGpuIdMask: *mut c_uint) -> ());

/// Base of every extension interface.
#[repr(C)]
pub struct IAmdDxExtInterface {
    pub lpVtbl: *const IAmdDxExtInterfaceVtbl,
}

#[repr(C)]
pub struct IAmdDxExtInterfaceVtbl {
    pub AddRef: AddRef_fn,
    pub Release: Release_fn,
    /// Slot of the protected virtual destructor (`~IAmdDxExtInterface`).
    /// Only the driver's `Release` may call it.
    pub dtor: Destructor_fn,
}

/// Extension context bound to one device.
#[repr(C)]
pub struct IAmdDxExt {
    pub lpVtbl: *const IAmdDxExtVtbl,
}

#[repr(C)]
pub struct IAmdDxExtVtbl {
    pub base: IAmdDxExtInterfaceVtbl,
    pub GetVersion: GetVersion_fn,
    pub GetExtInterface: GetExtInterface_fn,
}

/// OpenCL interop sub-interface.
#[repr(C)]
pub struct IAmdDxExtCLInterop {
    pub lpVtbl: *const IAmdDxExtCLInteropVtbl,
}

#[repr(C)]
pub struct IAmdDxExtCLInteropVtbl {
    pub base: IAmdDxExtInterfaceVtbl,
    pub QueryInteropGpuMask: QueryInteropGpuMask_fn,
}

#[cfg(test)]
mod tests {
    use std::mem::size_of;
    use super::*;

    #[test]
    fn vtable_slots() {
        let slot = size_of::<usize>();
        assert_eq!(size_of::<IAmdDxExtInterfaceVtbl>(), 3 * slot);
        // `GetVersion` and `QueryInteropGpuMask` follow the destructor.
        assert_eq!(size_of::<IAmdDxExtVtbl>(), 5 * slot);
        assert_eq!(size_of::<IAmdDxExtCLInteropVtbl>(), 4 * slot);
    }
}
