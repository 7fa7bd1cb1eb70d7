use num_traits::Zero;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// A coin with a decimal amount, used for gas prices where sub-unit
/// precision matters. Amounts are never negative.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Eq, PartialEq)]
pub struct DecCoin {
    pub amount: Decimal,
    pub denom: String,
}

impl DecCoin {
    pub fn new(amount: Decimal, denom: impl Into<String>) -> DecCoin {
        DecCoin {
            amount,
            denom: denom.into(),
        }
    }
}

impl fmt::Display for DecCoin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

impl FromStr for DecCoin {
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
        let amount: Decimal = match amount.parse() {
            Ok(v) => v,
            Err(e) => return Err(e.to_string()),
        };
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(format!("negative gas price {}", value));
        }
        if denom.is_empty() {
            return Err(format!("gas price {} has no denom", value));
        }
        Ok(DecCoin {
            amount,
            denom: denom.to_string(),
        })
    }
}

/// The node operator's minimum gas price policy, one decimal price per denom.
/// This is node local configuration, it is not consensus state and two nodes
/// may legitimately disagree on it.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Eq, PartialEq)]
pub struct MinGasPrices(pub Vec<DecCoin>);

impl MinGasPrices {
    pub fn new(entries: Vec<DecCoin>) -> MinGasPrices {
        MinGasPrices(entries)
    }

    /// The configured minimum price for a denom, zero when no entry exists.
    /// Zero means no minimum is enforced for that denom.
    pub fn amount_of(&self, denom: &str) -> Decimal {
        for entry in &self.0 {
            if entry.denom == denom {
                return entry.amount;
            }
        }
        Decimal::zero()
    }
}

impl fmt::Display for MinGasPrices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let list: Vec<String> = self.0.iter().map(|e| e.to_string()).collect();
        write!(f, "{}", list.join(","))
    }
}

/// Parses the standard node-config form, a comma separated list like
/// "0.1uosmo,0.02uion". An empty string yields an empty policy.
impl FromStr for MinGasPrices {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let mut entries = Vec::new();
        for part in value.split(',') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            entries.push(part.parse()?);
        }
        Ok(MinGasPrices(entries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_min_gas_prices() {
        let prices: MinGasPrices = "0.1uosmo,0.02uion".parse().unwrap();
        assert_eq!(prices.amount_of("uosmo"), "0.1".parse().unwrap());
        assert_eq!(prices.amount_of("uion"), "0.02".parse().unwrap());
        assert_eq!(prices.amount_of("uatom"), Decimal::zero());

        let empty: MinGasPrices = "".parse().unwrap();
        assert!(empty.0.is_empty());

        assert!("uosmo".parse::<MinGasPrices>().is_err());
        assert!("-0.1uosmo".parse::<MinGasPrices>().is_err());
        assert!("0.1".parse::<MinGasPrices>().is_err());
    }

    #[test]
    fn test_display_round_trip() {
        let prices: MinGasPrices = "0.1uosmo,0.02uion".parse().unwrap();
        let back: MinGasPrices = prices.to_string().parse().unwrap();
        assert_eq!(prices, back);
    }
}
