//! Adapter identifiers, local device identity and chain masks.

use std::fmt;

/// A locally unique adapter identifier, split into its two 32-bit halves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Luid {
    high_part: u32,
    low_part: u32,
}

impl Luid {
    pub fn new(high_part: u32, low_part: u32) -> Luid {
        Luid {
            high_part,
            low_part,
        }
    }

    pub fn high_part(&self) -> u32 {
        self.high_part
    }

    pub fn low_part(&self) -> u32 {
        self.low_part
    }
}

impl From<u64> for Luid {
    fn from(luid: u64) -> Luid {
        Luid::new((luid >> 32) as u32, luid as u32)
    }
}

impl From<Luid> for u64 {
    fn from(luid: Luid) -> u64 {
        (u64::from(luid.high_part) << 32) | u64::from(luid.low_part)
    }
}

impl fmt::Display for Luid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:#010x}:{:#010x}", self.high_part, self.low_part)
    }
}

/// The descriptor of the adapter backing an external graphics device.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdapterDescriptor {
    luid: Luid,
}

impl AdapterDescriptor {
    pub fn new(luid: Luid) -> AdapterDescriptor {
        AdapterDescriptor { luid }
    }

    pub fn luid(&self) -> Luid {
        self.luid
    }

    pub fn adapter_luid_high(&self) -> u32 {
        self.luid.high_part
    }

    pub fn adapter_luid_low(&self) -> u32 {
        self.luid.low_part
    }
}

/// Chain membership bitmask, one bit per linked GPU position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GpuMask(u32);

impl GpuMask {
    pub fn new(bits: u32) -> GpuMask {
        GpuMask(bits)
    }

    pub fn bits(&self) -> u32 {
        self.0
    }

    /// Returns true if the chain position `gpu_index` is a member.
    pub fn contains_index(&self, gpu_index: u32) -> bool {
        ChainBit::for_index(gpu_index).intersects(*self)
    }
}

impl fmt::Display for GpuMask {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:#b}", self.0)
    }
}

/// The bit of one chain position (`1 << gpu_index`).
///
/// Positions past the width of a `GpuMask` have no bit: they intersect
/// nothing and are never the primary position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChainBit {
    gpu_index: u32,
    bit: Option<u32>,
}

impl ChainBit {
    pub fn for_index(gpu_index: u32) -> ChainBit {
        ChainBit {
            gpu_index,
            bit: 1u32.checked_shl(gpu_index),
        }
    }

    pub fn gpu_index(&self) -> u32 {
        self.gpu_index
    }

    /// The raw bit, if representable.
    pub fn bits(&self) -> Option<u32> {
        self.bit
    }

    /// Returns true for the first position of a chain (a bit mask of `1`).
    pub fn is_primary(&self) -> bool {
        self.bit == Some(1)
    }

    pub fn intersects(&self, mask: GpuMask) -> bool {
        self.bit.map_or(false, |bit| bit & mask.bits() != 0)
    }
}

/// The identity of a local compute device as populated by device
/// enumeration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LocalDeviceIdentity {
    luid: Luid,
    gpu_index: u32,
}

impl LocalDeviceIdentity {
    pub fn new(luid: Luid, gpu_index: u32) -> LocalDeviceIdentity {
        LocalDeviceIdentity { luid, gpu_index }
    }

    pub fn luid(&self) -> Luid {
        self.luid
    }

    pub fn luid_high_part(&self) -> u32 {
        self.luid.high_part
    }

    pub fn luid_low_part(&self) -> u32 {
        self.luid.low_part
    }

    /// Position within a linked multi-GPU group, zero based.
    pub fn gpu_index(&self) -> u32 {
        self.gpu_index
    }

    pub fn chain_bit(&self) -> ChainBit {
        ChainBit::for_index(self.gpu_index)
    }
}
