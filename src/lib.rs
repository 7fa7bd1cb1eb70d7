#![warn(clippy::all)]
#![allow(clippy::pedantic)]
#![forbid(unsafe_code)]

extern crate num256;
extern crate num_traits;
extern crate serde;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate log;

pub mod coin;
pub mod converter;
pub mod error;
pub mod feetoken;
pub mod gasprice;
pub mod gate;
pub mod gov;
pub mod registry;
pub mod routing;

pub use coin::Coin;
pub use coin::Fee;
pub use converter::SpotPriceConverter;
pub use error::ConversionError;
pub use error::FeeAdmissionError;
pub use error::RegistryError;
pub use error::RoutingError;
pub use feetoken::FeeToken;
pub use feetoken::UpdateFeeTokenProposal;
pub use gasprice::DecCoin;
pub use gasprice::MinGasPrices;
pub use gate::MempoolFeeGate;
pub use registry::FeeTokenRegistry;
pub use registry::MemoryRegistry;
pub use routing::HrpSourceChannelMap;
