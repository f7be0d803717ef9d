//! Network classification tags.

use serde::{Deserialize, Serialize};

/// Category of network a site's base URL belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkTag {
    /// Regular internet host
    Clearnet,

    /// Tor hidden service (`.onion`)
    Tor,

    /// I2P eepsite (`.i2p`)
    I2p,
}

impl std::fmt::Display for NetworkTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NetworkTag::Clearnet => write!(f, "clearnet"),
            NetworkTag::Tor => write!(f, "tor"),
            NetworkTag::I2p => write!(f, "i2p"),
        }
    }
}
