//! Registry entry and governance proposal types for accepted fee tokens.
//! These are wire types, the prost field tags match the chain's proto schema.

/// A non base denom this chain accepts as fee payment, together with the
/// liquidity pool used to price it against the base denom.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct FeeToken {
    #[prost(string, tag = "1")]
    pub denom: ::prost::alloc::string::String,
    #[prost(uint64, tag = "2")]
    pub pool_id: u64,
}

impl FeeToken {
    pub fn new(denom: impl Into<String>, pool_id: u64) -> FeeToken {
        FeeToken {
            denom: denom.into(),
            pool_id,
        }
    }
}

/// Governance proposal payload that registers or replaces one accepted fee
/// token. Authorization and voting happen in the proposal framework, this
/// crate only applies the result.
#[derive(Serialize, Deserialize, Clone, PartialEq, ::prost::Message)]
pub struct UpdateFeeTokenProposal {
    #[prost(string, tag = "1")]
    pub title: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub description: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "3")]
    pub fee_token: ::core::option::Option<FeeToken>,
}
