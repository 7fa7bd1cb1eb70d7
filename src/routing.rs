use crate::error::RoutingError;

/// Contract for mapping a bech32 address prefix to the IBC channel outbound
/// transfers for that prefix should use. Adjacent cross-chain transfer
/// functionality consumes this; nothing in the fee gate does. It is declared
/// here because implementations live behind the same governance surface as
/// the fee token table.
pub trait HrpSourceChannelMap {
    /// The source channel registered for a bech32 prefix.
    fn hrp_source_channel(&self, hrp: &str) -> Result<String, RoutingError>;

    /// This chain's own bech32 prefix.
    fn native_hrp(&self) -> Result<String, RoutingError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct StaticMap {
        native: String,
        channels: HashMap<String, String>,
    }

    impl HrpSourceChannelMap for StaticMap {
        fn hrp_source_channel(&self, hrp: &str) -> Result<String, RoutingError> {
            match self.channels.get(hrp) {
                Some(v) => Ok(v.clone()),
                None => Err(RoutingError::PrefixNotRegistered(hrp.to_string())),
            }
        }
        fn native_hrp(&self) -> Result<String, RoutingError> {
            Ok(self.native.clone())
        }
    }

    #[test]
    fn test_contract_shape() {
        let mut channels = HashMap::new();
        channels.insert("cosmos".to_string(), "channel-0".to_string());
        let map = StaticMap {
            native: "osmo".to_string(),
            channels,
        };
        assert_eq!(map.native_hrp().unwrap(), "osmo");
        assert_eq!(map.hrp_source_channel("cosmos").unwrap(), "channel-0");
        assert_eq!(
            map.hrp_source_channel("akash").unwrap_err(),
            RoutingError::PrefixNotRegistered("akash".to_string())
        );
    }
}
