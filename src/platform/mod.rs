//! Platform backends and the raw-pointer association entry point.

#[cfg(windows)]
pub mod win32;

#[cfg(windows)]
pub use self::win32::{associate_d3d11_device, DxxClInterop, DxxExtension, DxxExtensionLocator};

/// Returns true if the `ID3D11Device` pointed to by `d3d11_device` can
/// interoperate with the local device described by `identity`.
///
/// Direct3D 11 only exists on Windows. Everywhere else no device can be
/// associated.
///
/// ### Safety
///
/// On Windows, `d3d11_device` must be null or point to a live
/// `ID3D11Device` for the duration of the call.
#[cfg(not(windows))]
pub unsafe fn associate_d3d11_device(
    _d3d11_device: *mut std::ffi::c_void,
    _identity: &crate::LocalDeviceIdentity,
) -> bool {
    false
}
