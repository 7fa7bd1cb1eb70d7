use cosmos_sdk_proto::cosmos::base::v1beta1::Coin as ProtoCoin;
use cosmos_sdk_proto::cosmos::tx::v1beta1::Fee as ProtoFee;
use num256::Uint256;
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

/// Coin holds some amount of one denom. We convert from ProtoCoin so the rest
/// of the crate works with a validated amount instead of a decimal string.
#[derive(Serialize, Debug, Default, Clone, Deserialize, Eq, PartialEq, Hash)]
pub struct Coin {
    pub amount: Uint256,
    pub denom: String,
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

impl TryFrom<&str> for Coin {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl FromStr for Coin {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        let mut split_idx = 0;
        for (idx, char) in value.char_indices() {
            if char.is_alphabetic() {
                split_idx = idx;
                break;
            }
        }
        let (amount, denom) = value.split_at(split_idx);
        match amount.parse() {
            Ok(v) => Ok(Coin {
                amount: v,
                denom: denom.to_string(),
            }),
            Err(e) => Err(e.to_string()),
        }
    }
}

impl Coin {
    pub fn new(amount: impl Into<Uint256>, denom: impl Into<String>) -> Coin {
        Coin {
            amount: amount.into(),
            denom: denom.into(),
        }
    }

    /// utility function to display a list of coins
    pub fn display_list(input: &[Coin]) -> String {
        let mut out = String::new();
        for i in input {
            out += &i.to_string()
        }
        out
    }
}

impl TryFrom<ProtoCoin> for Coin {
    type Error = String;

    fn try_from(value: ProtoCoin) -> Result<Self, Self::Error> {
        match value.amount.parse() {
            Ok(amount) => Ok(Coin {
                amount,
                denom: value.denom,
            }),
            Err(e) => Err(e.to_string()),
        }
    }
}

impl From<Coin> for ProtoCoin {
    fn from(value: Coin) -> Self {
        ProtoCoin {
            denom: value.denom,
            amount: value.amount.to_string(),
        }
    }
}

/// Fee is the fee payload a transaction carries: an ordered list of coins
/// offered as payment plus the declared gas limit. The ratio of the two yields
/// an effective gas price, which the mempool gate compares against the node's
/// minimum. Payer and granter metadata from the wire format are not part of
/// the admission decision and are dropped on conversion.
#[derive(Serialize, Debug, Default, Clone, Deserialize, Eq, PartialEq, Hash)]
pub struct Fee {
    pub amount: Vec<Coin>,
    pub gas_limit: u64,
}

impl Fee {
    pub fn new(amount: Vec<Coin>, gas_limit: u64) -> Fee {
        Fee { amount, gas_limit }
    }
}

impl TryFrom<ProtoFee> for Fee {
    type Error = String;

    fn try_from(value: ProtoFee) -> Result<Self, Self::Error> {
        let mut converted_coins = Vec::new();
        for coin in value.amount {
            converted_coins.push(Coin::try_from(coin)?);
        }
        Ok(Fee {
            amount: converted_coins,
            gas_limit: value.gas_limit,
        })
    }
}

impl From<Fee> for ProtoFee {
    fn from(value: Fee) -> Self {
        let mut converted_coins = Vec::new();
        for coin in value.amount {
            converted_coins.push(coin.into());
        }
        ProtoFee {
            amount: converted_coins,
            gas_limit: value.gas_limit,
            payer: String::new(),
            granter: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coin_parse() {
        let test: Coin = "100uosmo".parse().unwrap();
        assert_eq!(test, Coin::new(100u64, "uosmo"));
        let _test2: Coin = "100000000000gravity0x7580bFE88Dd3d07947908FAE12d95872a260F2D8"
            .parse()
            .unwrap();
        let bad: Result<Coin, String> = "not a coin".parse();
        assert!(bad.is_err());
    }

    #[test]
    fn test_proto_coin_conversion() {
        let proto = ProtoCoin {
            denom: "uosmo".to_string(),
            amount: "20000".to_string(),
        };
        let coin = Coin::try_from(proto.clone()).unwrap();
        assert_eq!(coin, Coin::new(20000u64, "uosmo"));
        assert_eq!(ProtoCoin::from(coin), proto);

        let malformed = ProtoCoin {
            denom: "uosmo".to_string(),
            amount: "twenty".to_string(),
        };
        assert!(Coin::try_from(malformed).is_err());
    }

    #[test]
    fn test_proto_fee_conversion() {
        let proto = ProtoFee {
            amount: vec![ProtoCoin {
                denom: "uusdc".to_string(),
                amount: "10".to_string(),
            }],
            gas_limit: 200_000,
            payer: String::new(),
            granter: String::new(),
        };
        let fee = Fee::try_from(proto).unwrap();
        assert_eq!(fee.gas_limit, 200_000);
        assert_eq!(fee.amount, vec![Coin::new(10u64, "uusdc")]);
    }
}
