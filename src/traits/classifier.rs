//! Network classification of a site's base URL.

use url::Url;

use crate::types::network::NetworkTag;

/// Classifies which category of network a base URL belongs to.
pub trait NetworkClassifier: Send + Sync {
    /// Derive the network tag for a site's base URL.
    fn classify(&self, base_url: &Url) -> NetworkTag;
}

/// Default classifier keyed on the host suffix.
///
/// `.onion` hosts map to Tor, `.i2p` hosts to I2P, everything else to the
/// clearnet.
#[derive(Debug, Clone, Copy, Default)]
pub struct SuffixClassifier;

impl NetworkClassifier for SuffixClassifier {
    fn classify(&self, base_url: &Url) -> NetworkTag {
        match base_url.host_str() {
            Some(host) if host.ends_with(".onion") => NetworkTag::Tor,
            Some(host) if host.ends_with(".i2p") => NetworkTag::I2p,
            _ => NetworkTag::Clearnet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(url: &str) -> NetworkTag {
        SuffixClassifier.classify(&Url::parse(url).unwrap())
    }

    #[test]
    fn test_onion_hosts_are_tor() {
        assert_eq!(classify("http://examplev3abcdef.onion"), NetworkTag::Tor);
    }

    #[test]
    fn test_i2p_hosts_are_i2p() {
        assert_eq!(classify("http://forum.i2p"), NetworkTag::I2p);
    }

    #[test]
    fn test_everything_else_is_clearnet() {
        assert_eq!(classify("http://example.net"), NetworkTag::Clearnet);
        assert_eq!(classify("https://10.0.0.1/"), NetworkTag::Clearnet);
    }
}
