use crate::error::RegistryError;
use crate::feetoken::UpdateFeeTokenProposal;
use crate::registry::FeeTokenRegistry;

/// Applies a passed fee token proposal to the registry. The proposal
/// framework has already decided the proposal is authorized and passed; this
/// only performs the resulting table mutation.
pub fn handle_update_fee_token_proposal<R: FeeTokenRegistry>(
    registry: &R,
    proposal: UpdateFeeTokenProposal,
) -> Result<(), RegistryError> {
    let fee_token = match proposal.fee_token {
        Some(v) => v,
        None => {
            return Err(RegistryError::InvalidFeeToken(
                "proposal contains no fee token".to_string(),
            ))
        }
    };
    info!(
        "governance registering fee token {} priced through pool {}",
        fee_token.denom, fee_token.pool_id
    );
    registry.set_fee_token(fee_token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feetoken::FeeToken;
    use crate::registry::MemoryRegistry;

    #[test]
    fn test_proposal_updates_registry() {
        let registry = MemoryRegistry::new("uosmo");
        let proposal = UpdateFeeTokenProposal {
            title: "Accept USDC for fees".to_string(),
            description: "Register uusdc priced through pool 2".to_string(),
            fee_token: Some(FeeToken::new("uusdc", 2)),
        };
        handle_update_fee_token_proposal(&registry, proposal).unwrap();
        assert_eq!(registry.fee_token("uusdc").unwrap(), FeeToken::new("uusdc", 2));
    }

    #[test]
    fn test_proposal_without_fee_token_is_rejected() {
        let registry = MemoryRegistry::new("uosmo");
        let proposal = UpdateFeeTokenProposal {
            title: "empty".to_string(),
            description: String::new(),
            fee_token: None,
        };
        assert!(handle_update_fee_token_proposal(&registry, proposal).is_err());
    }
}
