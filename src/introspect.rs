//! Traversal from an external graphics device to its physical adapter.
//!
//! Every step hands back an owned reference. Dropping it releases the
//! reference, so an early return anywhere in the walk leaves nothing behind.

use crate::error::TraversalError;
use crate::identity::AdapterDescriptor;

/// An externally created graphics device (e.g. `ID3D11Device`).
pub trait GraphicsDevice {
    type InteropDevice: InteropDevice;

    /// Queries the logical interop device containing this device (e.g.
    /// `IDXGIDevice`).
    fn interop_device(&self) -> Result<Self::InteropDevice, TraversalError>;
}

/// The logical device through which the physical adapter is reached.
pub trait InteropDevice {
    type Adapter: GraphicsAdapter;

    fn adapter(&self) -> Result<Self::Adapter, TraversalError>;
}

/// A physical adapter (e.g. `IDXGIAdapter`).
pub trait GraphicsAdapter {
    fn descriptor(&self) -> Result<AdapterDescriptor, TraversalError>;
}

/// Walks `device` down to the descriptor of its adapter.
///
/// The interop device and adapter references are released before this
/// returns, on success or failure.
pub fn adapter_descriptor<D>(device: &D) -> Result<AdapterDescriptor, TraversalError>
where
    D: GraphicsDevice + ?Sized,
{
    let interop_device = device.interop_device()?;
    let adapter = interop_device.adapter()?;
    adapter.descriptor()
}
