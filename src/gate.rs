use crate::coin::Coin;
use crate::coin::Fee;
use crate::converter::SpotPriceConverter;
use crate::error::FeeAdmissionError;
use crate::gasprice::MinGasPrices;
use crate::registry::FeeTokenRegistry;
use num_traits::ToPrimitive;
use num_traits::Zero;
use rust_decimal::Decimal;

/// MempoolFeeGate checks that a transaction's fee is well formed, paid in a
/// denom the chain accepts, and, for local mempool admission only, at least
/// as large as the node's minimum gas price requires. Fees paid in a non base
/// denom are valued through the spot price converter before the comparison.
///
/// The minimum price rule applies only when `is_check_tx` is set and
/// `simulate` is not: it is node local policy, not consensus state, so it
/// must never influence execution-time or simulated evaluation.
///
/// The gate holds no mutable state. One call performs at most two registry
/// lookups and one conversion, then returns a terminal decision; forwarding
/// an accepted transaction is the caller's job.
pub struct MempoolFeeGate<R, C> {
    registry: R,
    converter: C,
}

impl<R: FeeTokenRegistry, C: SpotPriceConverter> MempoolFeeGate<R, C> {
    pub fn new(registry: R, converter: C) -> MempoolFeeGate<R, C> {
        MempoolFeeGate {
            registry,
            converter,
        }
    }

    /// Evaluates one candidate transaction's fee, short circuiting on the
    /// first failed check. `Ok(())` means the caller should continue its own
    /// pipeline. The minimum price policy is read fresh on every call.
    pub fn evaluate(
        &self,
        fee: &Fee,
        is_check_tx: bool,
        simulate: bool,
        min_gas_prices: &MinGasPrices,
    ) -> Result<(), FeeAdmissionError> {
        trace!(
            "evaluating fee {} gas {} check_tx {} simulate {}",
            Coin::display_list(&fee.amount),
            fee.gas_limit,
            is_check_tx,
            simulate
        );

        if fee.amount.len() > 1 {
            return Err(FeeAdmissionError::TooManyFeeCoins {
                count: fee.amount.len(),
            });
        }

        let base_denom = self
            .registry
            .base_denom()
            .map_err(|_| FeeAdmissionError::BaseDenomUnset)?;

        // a non base denom fee must name a registered fee token, whatever
        // the flags say
        if let Some(coin) = fee.amount.first() {
            if coin.denom != base_denom {
                self.registry.fee_token(&coin.denom)?;
            }
        }

        if is_check_tx && !simulate {
            let min_price = min_gas_prices.amount_of(&base_denom);
            if !min_price.is_zero() {
                let required = required_base_fee(min_price, fee.gas_limit, &base_denom)?;

                let coin = match fee.amount.first() {
                    Some(v) => v,
                    None => {
                        return Err(FeeAdmissionError::InsufficientFee {
                            attached: None,
                            converted: None,
                            required,
                        })
                    }
                };

                if coin.denom == base_denom {
                    if coin.amount < required.amount {
                        return Err(FeeAdmissionError::InsufficientFee {
                            attached: Some(coin.clone()),
                            converted: None,
                            required,
                        });
                    }
                } else {
                    let converted = self
                        .converter
                        .convert_to_base_token(coin)
                        .map_err(|error| FeeAdmissionError::PriceConversionFailed {
                            coin: coin.clone(),
                            error,
                        })?;
                    debug!("fee {} converts to {}", coin, converted);
                    if converted.amount < required.amount {
                        return Err(FeeAdmissionError::InsufficientFee {
                            attached: Some(coin.clone()),
                            converted: Some(converted),
                            required,
                        });
                    }
                }
            }
        }

        Ok(())
    }
}

/// The fee the node's policy demands for a gas limit,
/// ceil(min_price * gas_limit) in the base denom. Rounding is always upward
/// so truncation can never under charge.
pub fn required_base_fee(
    min_price: Decimal,
    gas_limit: u64,
    base_denom: &str,
) -> Result<Coin, FeeAdmissionError> {
    let amount = min_price
        .checked_mul(Decimal::from(gas_limit))
        .map(|v| v.ceil())
        .and_then(|v| v.to_u128())
        .ok_or(FeeAdmissionError::FeeComputationOverflow)?;
    Ok(Coin::new(amount, base_denom))
}
