use serde::{Deserialize, Serialize};

fn enabled() -> bool {
    true
}

/// Options that affect how payloads are encoded.
///
/// Decoding never depends on the configuration: every form an encoder may
/// produce is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Emit `z` in place of a complete all-zero ascii85 group. Enabled by
    /// default, which keeps the output identical to ArrowVortex's own.
    #[serde(rename = "foldZeroGroups", default = "enabled")]
    pub fold_zero_groups: bool,
}

impl CodecConfig {
    pub fn from_json(json: &str) -> serde_json::Result<CodecConfig> {
        serde_json::from_str(json)
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            fold_zero_groups: enabled(),
        }
    }
}
