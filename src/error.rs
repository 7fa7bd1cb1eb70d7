use crate::coin::Coin;
use std::error::Error;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;

/// Errors produced by a fee token registry lookup or update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The chain has no base denom configured, which means the node itself
    /// is misconfigured rather than any transaction being bad.
    BaseDenomNotConfigured,
    /// The denom is not registered as an accepted fee token.
    FeeTokenNotFound(String),
    /// The fee token being stored is not usable, the string explains why.
    InvalidFeeToken(String),
}

impl Display for RegistryError {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            RegistryError::BaseDenomNotConfigured => {
                write!(f, "no base denom configured for this chain")
            }
            RegistryError::FeeTokenNotFound(denom) => {
                write!(f, "{} is not a registered fee token", denom)
            }
            RegistryError::InvalidFeeToken(reason) => {
                write!(f, "invalid fee token: {}", reason)
            }
        }
    }
}

impl Error for RegistryError {}

/// Errors produced by the spot price converter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// No liquidity route exists between this denom and the base denom.
    NoLiquidityPath { denom: String },
    /// The pricing venue exists but could not be queried.
    VenueUnavailable(String),
}

impl Display for ConversionError {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            ConversionError::NoLiquidityPath { denom } => {
                write!(f, "no liquidity path from {} to the base denom", denom)
            }
            ConversionError::VenueUnavailable(val) => {
                write!(f, "pricing venue unavailable: {}", val)
            }
        }
    }
}

impl Error for ConversionError {}

/// Errors produced by a bech32 prefix to source channel lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutingError {
    PrefixNotRegistered(String),
    NativePrefixNotConfigured,
}

impl Display for RoutingError {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            RoutingError::PrefixNotRegistered(hrp) => {
                write!(f, "no source channel registered for prefix {}", hrp)
            }
            RoutingError::NativePrefixNotConfigured => {
                write!(f, "no native bech32 prefix configured")
            }
        }
    }
}

impl Error for RoutingError {}

/// The reasons the mempool fee gate can reject a transaction. Every variant
/// carries the concrete denoms and amounts involved so the rejection message
/// tells the payer exactly what to fix; no rejection is silent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeeAdmissionError {
    /// The fee payload names more than one denom. Fees must be paid in a
    /// single denom so conversion stays unambiguous.
    TooManyFeeCoins { count: usize },
    /// The registry could not resolve the chain's base denom. Fatal to the
    /// call and an operator problem, not a transaction problem.
    BaseDenomUnset,
    /// The fee denom is neither the base denom nor a registered fee token.
    UnsupportedFeeDenom(String),
    /// The fee, after conversion if any, is below the node's minimum.
    /// `attached` is None when no fee was attached at all, `converted` is
    /// Some only when a non base denom fee was priced into the base denom.
    InsufficientFee {
        attached: Option<Coin>,
        converted: Option<Coin>,
        required: Coin,
    },
    /// The spot price converter could not price the attached fee coin.
    PriceConversionFailed { coin: Coin, error: ConversionError },
    /// min price times gas overflowed the decimal type. Only reachable with
    /// absurd config values, but it must not panic the intake path.
    FeeComputationOverflow,
}

impl Display for FeeAdmissionError {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            FeeAdmissionError::TooManyFeeCoins { count } => {
                write!(f, "fee may be paid in at most one denom, got {}", count)
            }
            FeeAdmissionError::BaseDenomUnset => {
                write!(f, "base denom for fees is not configured on this node")
            }
            FeeAdmissionError::UnsupportedFeeDenom(denom) => {
                write!(f, "fee denom {} is not accepted by this chain", denom)
            }
            FeeAdmissionError::InsufficientFee {
                attached,
                converted,
                required,
            } => match (attached, converted) {
                (None, _) => {
                    write!(f, "insufficient fees; no fee attached, required: {}", required)
                }
                (Some(got), None) => {
                    write!(f, "insufficient fees; got: {} required: {}", got, required)
                }
                (Some(got), Some(conv)) => write!(
                    f,
                    "insufficient fees; got: {} which converts to {}. required: {}",
                    got, conv, required
                ),
            },
            FeeAdmissionError::PriceConversionFailed { coin, error } => {
                write!(f, "could not convert fee {} to the base denom: {}", coin, error)
            }
            FeeAdmissionError::FeeComputationOverflow => {
                write!(f, "required fee computation overflowed")
            }
        }
    }
}

impl Error for FeeAdmissionError {}

impl From<RegistryError> for FeeAdmissionError {
    fn from(error: RegistryError) -> Self {
        match error {
            RegistryError::BaseDenomNotConfigured => FeeAdmissionError::BaseDenomUnset,
            RegistryError::FeeTokenNotFound(denom) => FeeAdmissionError::UnsupportedFeeDenom(denom),
            RegistryError::InvalidFeeToken(reason) => FeeAdmissionError::UnsupportedFeeDenom(reason),
        }
    }
}
