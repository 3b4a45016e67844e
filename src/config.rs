//! Environment configuration.

use std::env;
use std::str::FromStr;
use crate::error::{ConfigError, Result};

/// Name of the environment variable selecting the extension policy.
pub const EXTENSION_POLICY_ENV_VAR: &str = "PAL_INTEROP_DXX_EXTENSION";

/// Whether the vendor extension is probed for chain membership.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExtensionPolicy {
    /// Look up the extension and use its chain mask when available.
    Probe,
    /// Never look up the extension. Matching relies on the primary chain
    /// position fallback.
    Skip,
}

impl Default for ExtensionPolicy {
    fn default() -> ExtensionPolicy {
        ExtensionPolicy::Probe
    }
}

impl FromStr for ExtensionPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> ::std::result::Result<ExtensionPolicy, ConfigError> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PROBE" | "ON" => Ok(ExtensionPolicy::Probe),
            "SKIP" | "OFF" => Ok(ExtensionPolicy::Skip),
            _ => Err(ConfigError::InvalidExtensionPolicy(s.to_owned())),
        }
    }
}

/// Returns the extension policy as specified by environment variable or
/// else `ExtensionPolicy::Probe`.
pub fn default_extension_policy() -> Result<ExtensionPolicy> {
    match env::var(EXTENSION_POLICY_ENV_VAR) {
        Ok(ref s) => s.parse().map_err(Into::into),
        Err(_) => Ok(ExtensionPolicy::default()),
    }
}
