use crate::coin::Coin;
use crate::error::ConversionError;

/// The spot price oracle the fee gate uses to value a non base denom fee.
/// The chain's real implementation prices through its AMM pools; the gate
/// only needs the quote.
pub trait SpotPriceConverter {
    /// Values `coin` in the chain's base denom at the current spot price.
    /// This must be a pure query: implementations must not mutate the venue
    /// they price against, and a failure here means the coin could not be
    /// priced right now, not that it is worth zero.
    fn convert_to_base_token(&self, coin: &Coin) -> Result<Coin, ConversionError>;
}

impl<T: SpotPriceConverter + ?Sized> SpotPriceConverter for &T {
    fn convert_to_base_token(&self, coin: &Coin) -> Result<Coin, ConversionError> {
        (**self).convert_to_base_token(coin)
    }
}
