//! Public API scenarios with minimal fake devices.

use std::ptr;
use pal_interop::{
    associate_d3d11_device, AdapterDescriptor, ClInteropExtension, ExtVersion, ExtensionContext,
    ExtensionError, GpuMask, GraphicsAdapter, GraphicsDevice, InteropAdapterMatcher,
    InteropDevice, LocalDeviceIdentity, Luid, NoExtension, TraversalError, TraversalStage,
    VendorExtensionLocator,
};

struct FakeDevice {
    luid: Option<Luid>,
}

struct FakeAdapter(Option<Luid>);

impl GraphicsDevice for FakeDevice {
    type InteropDevice = FakeAdapter;

    fn interop_device(&self) -> Result<FakeAdapter, TraversalError> {
        Ok(FakeAdapter(self.luid))
    }
}

impl InteropDevice for FakeAdapter {
    type Adapter = FakeAdapter;

    fn adapter(&self) -> Result<FakeAdapter, TraversalError> {
        Ok(FakeAdapter(self.0))
    }
}

impl GraphicsAdapter for FakeAdapter {
    fn descriptor(&self) -> Result<AdapterDescriptor, TraversalError> {
        self.0
            .map(AdapterDescriptor::new)
            .ok_or_else(|| TraversalError::new(TraversalStage::Descriptor, "lost device"))
    }
}

/// An extension which always reports `mask`.
struct FixedMask(u32);

impl VendorExtensionLocator<FakeDevice> for FixedMask {
    type Context = FixedMask;

    fn try_load(&self, _device: &FakeDevice) -> Option<FixedMask> {
        Some(FixedMask(self.0))
    }
}

impl ExtensionContext for FixedMask {
    type ClInterop = FixedMask;

    fn version(&self) -> Result<ExtVersion, ExtensionError> {
        Ok(ExtVersion::new(1, 0))
    }

    fn cl_interop(&self) -> Option<FixedMask> {
        Some(FixedMask(self.0))
    }
}

impl ClInteropExtension for FixedMask {
    fn query_interop_gpu_mask(&self) -> GpuMask {
        GpuMask::new(self.0)
    }
}

fn device(high: u32, low: u32) -> FakeDevice {
    FakeDevice {
        luid: Some(Luid::new(high, low)),
    }
}

fn local(gpu_index: u32) -> LocalDeviceIdentity {
    LocalDeviceIdentity::new(Luid::new(0x1, 0x2), gpu_index)
}

#[test]
fn matching_luid_primary_gpu_without_extension() {
    let matcher = InteropAdapterMatcher::new(NoExtension);
    assert!(matcher.can_interoperate(&device(0x1, 0x2), &local(0)));
}

#[test]
fn different_luid_without_extension() {
    let matcher = InteropAdapterMatcher::new(NoExtension);
    assert!(!matcher.can_interoperate(&device(0x9, 0x9), &local(0)));
}

#[test]
fn second_gpu_in_extension_mask() {
    let matcher = InteropAdapterMatcher::new(FixedMask(0b10));
    assert!(matcher.can_interoperate(&device(0x1, 0x2), &local(1)));
}

#[test]
fn second_gpu_outside_extension_mask() {
    let matcher = InteropAdapterMatcher::new(FixedMask(0b01));
    assert!(!matcher.can_interoperate(&device(0x1, 0x2), &local(1)));
}

#[test]
fn secondary_gpu_rejected_without_extension() {
    let matcher = InteropAdapterMatcher::new(NoExtension);
    assert!(!matcher.can_interoperate(&device(0x1, 0x2), &local(1)));
}

#[test]
fn lost_device_is_not_interoperable() {
    let matcher = InteropAdapterMatcher::new(FixedMask(!0));
    assert!(!matcher.can_interoperate(&FakeDevice { luid: None }, &local(0)));
}

#[test]
fn null_d3d11_device_is_not_interoperable() {
    assert!(!unsafe { associate_d3d11_device(ptr::null_mut(), &local(0)) });
}
