//! Decides whether an external graphics device can interoperate with a local
//! compute device.
//!
//! Two devices interoperate when the external device's adapter has the same
//! LUID as the local device and, for linked multi-GPU adapters, when the
//! local device's chain position is among those the external device spans.
//! Chain membership is only known through the vendor extension. Without it,
//! only the primary chain position is accepted: on switchable graphics
//! platforms the D3D11 device may be owned by another vendor's integrated
//! GPU while the compute target is a secondary discrete GPU.

use tracing::{debug, warn};
use crate::error::Result;
use crate::extension::{self, VendorExtensionLocator};
use crate::identity::{ChainBit, GpuMask, LocalDeviceIdentity, Luid};
use crate::introspect::{self, GraphicsDevice};

/// Why two devices were found not to interoperate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mismatch {
    /// The devices sit on different physical adapters.
    Adapter { local: Luid, external: Luid },
    /// Same adapter, but the external device does not span this chain
    /// position.
    Chain { chain_bit: ChainBit, mask: GpuMask },
}

/// Outcome of matching before the fallback heuristic is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchVerdict {
    Interoperable,
    NotInteroperable(Mismatch),
    /// The adapters match but chain membership could not be queried.
    NeedsFallback,
}

impl MatchVerdict {
    /// Folds the verdict into a boolean, resolving `NeedsFallback` by
    /// accepting only the primary chain position.
    pub fn resolve(self, chain_bit: ChainBit) -> bool {
        match self {
            MatchVerdict::Interoperable => true,
            MatchVerdict::NotInteroperable(_) => false,
            MatchVerdict::NeedsFallback => chain_bit.is_primary(),
        }
    }
}

/// Matches external graphics devices against local compute devices.
///
/// Holds no state besides the extension locator; every call is
/// independent.
#[derive(Clone, Debug, Default)]
pub struct InteropAdapterMatcher<L> {
    locator: L,
}

impl<L> InteropAdapterMatcher<L> {
    pub fn new(locator: L) -> InteropAdapterMatcher<L> {
        InteropAdapterMatcher { locator }
    }

    /// Returns true if `device` and the local device described by
    /// `identity` can share resources.
    ///
    /// Failing to reach the external device's adapter counts as not
    /// interoperable.
    pub fn can_interoperate<D>(&self, device: &D, identity: &LocalDeviceIdentity) -> bool
    where
        D: GraphicsDevice + ?Sized,
        L: VendorExtensionLocator<D>,
    {
        let chain_bit = identity.chain_bit();

        match self.verdict(device, identity) {
            Ok(verdict) => {
                let interoperable = verdict.resolve(chain_bit);
                debug!(
                    luid = %identity.luid(),
                    gpu_index = identity.gpu_index(),
                    ?verdict,
                    interoperable,
                    "matched external graphics device"
                );
                interoperable
            }
            Err(err) => {
                warn!(luid = %identity.luid(), error = %err, "external graphics device rejected");
                false
            }
        }
    }

    /// Matches `device` against `identity` without applying the fallback.
    pub fn verdict<D>(&self, device: &D, identity: &LocalDeviceIdentity) -> Result<MatchVerdict>
    where
        D: GraphicsDevice + ?Sized,
        L: VendorExtensionLocator<D>,
    {
        let external = introspect::adapter_descriptor(device)?.luid();

        if external != identity.luid() {
            return Ok(MatchVerdict::NotInteroperable(Mismatch::Adapter {
                local: identity.luid(),
                external,
            }));
        }

        let chain_bit = identity.chain_bit();

        Ok(match extension::query_gpu_mask(&self.locator, device) {
            Some(mask) if chain_bit.intersects(mask) => MatchVerdict::Interoperable,
            Some(mask) => MatchVerdict::NotInteroperable(Mismatch::Chain { chain_bit, mask }),
            None => MatchVerdict::NeedsFallback,
        })
    }
}
