//! Standard error type for pal-interop.
//!
//! None of these ever cross `can_interoperate`: the matcher folds them into
//! its boolean. They surface through `InteropAdapterMatcher::verdict`, the
//! stream identifier conversions and the configuration helpers.

use std::fmt;

/// pal-interop error result type.
pub type Result<T> = ::std::result::Result<T, Error>;

/// The step of the device -> interop device -> adapter -> descriptor walk
/// which failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TraversalStage {
    InteropDevice,
    Adapter,
    Descriptor,
}

impl fmt::Display for TraversalStage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            TraversalStage::InteropDevice => write!(f, "interop device query"),
            TraversalStage::Adapter => write!(f, "adapter retrieval"),
            TraversalStage::Descriptor => write!(f, "adapter descriptor read"),
        }
    }
}

/// Failure to reach the adapter backing an external graphics device.
#[derive(Debug, Clone, thiserror::Error)]
#[error("Unable to reach the adapter of the external device: {stage} failed ({detail}).")]
pub struct TraversalError {
    stage: TraversalStage,
    detail: String,
}

impl TraversalError {
    pub fn new<S: Into<String>>(stage: TraversalStage, detail: S) -> TraversalError {
        TraversalError {
            stage,
            detail: detail.into(),
        }
    }

    pub fn stage(&self) -> TraversalStage {
        self.stage
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }
}

/// An error reported by a vendor extension context.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ExtensionError {
    #[error("Vendor extension version query failed (code: {code:#010x}).")]
    VersionQuery { code: i32 },
}

/// An invalid configuration value.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error(
        "The environment variable 'PAL_INTEROP_DXX_EXTENSION' is set to '{0}'. \
        Valid values are: 'PROBE', 'ON', 'SKIP' and 'OFF'."
    )]
    InvalidExtensionPolicy(String),
}

/// Every error pal-interop can report.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    // Traversal: the external device's adapter could not be reached:
    #[error("{0}")]
    Traversal(#[from] TraversalError),
    // Extension: a vendor extension call failed:
    #[error("{0}")]
    Extension(#[from] ExtensionError),
    // UnknownCode: a raw identifier outside its enum:
    #[error("Unknown {kind} code: {code:#x}.")]
    UnknownCode { kind: &'static str, code: u32 },
    // Config:
    #[error("{0}")]
    Config(#[from] ConfigError),
}

impl Error {
    /// Returns the failed traversal stage for `Traversal` variants.
    pub fn traversal_stage(&self) -> Option<TraversalStage> {
        match *self {
            Error::Traversal(ref err) => Some(err.stage()),
            _ => None,
        }
    }
}
