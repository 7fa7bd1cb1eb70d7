use crate::error::RegistryError;
use crate::feetoken::FeeToken;
use std::collections::HashMap;
use std::sync::PoisonError;
use std::sync::RwLock;

/// The accepted-currency table the fee gate consults. The chain's real
/// implementation is a storage backed keeper; anything that can answer these
/// three questions can stand in for it.
///
/// Implementations must be safe to read from many concurrent admission
/// checks while governance applies writes, at whatever granularity the
/// implementation chooses. The gate itself takes no locks.
pub trait FeeTokenRegistry {
    /// The chain's base denom, the one fees and gas are accounted in.
    fn base_denom(&self) -> Result<String, RegistryError>;

    /// Looks up a denom in the accepted fee token table.
    fn fee_token(&self, denom: &str) -> Result<FeeToken, RegistryError>;

    /// Registers or replaces an accepted fee token. Only the governance
    /// update path calls this, never the gate.
    fn set_fee_token(&self, token: FeeToken) -> Result<(), RegistryError>;
}

impl<T: FeeTokenRegistry + ?Sized> FeeTokenRegistry for &T {
    fn base_denom(&self) -> Result<String, RegistryError> {
        (**self).base_denom()
    }
    fn fee_token(&self, denom: &str) -> Result<FeeToken, RegistryError> {
        (**self).fee_token(denom)
    }
    fn set_fee_token(&self, token: FeeToken) -> Result<(), RegistryError> {
        (**self).set_fee_token(token)
    }
}

/// An in-memory registry. Serves as the node-local table in tests and in
/// deployments where the accepted set is loaded at startup. Reads and writes
/// are serialized with an RwLock so concurrent admission checks are safe.
#[derive(Debug, Default)]
pub struct MemoryRegistry {
    base_denom: Option<String>,
    fee_tokens: RwLock<HashMap<String, FeeToken>>,
}

impl MemoryRegistry {
    pub fn new(base_denom: impl Into<String>) -> MemoryRegistry {
        MemoryRegistry {
            base_denom: Some(base_denom.into()),
            fee_tokens: RwLock::new(HashMap::new()),
        }
    }

    /// A registry with no base denom set, only useful for exercising the
    /// misconfigured node path.
    pub fn unconfigured() -> MemoryRegistry {
        MemoryRegistry::default()
    }
}

impl FeeTokenRegistry for MemoryRegistry {
    fn base_denom(&self) -> Result<String, RegistryError> {
        match &self.base_denom {
            Some(v) => Ok(v.clone()),
            None => Err(RegistryError::BaseDenomNotConfigured),
        }
    }

    fn fee_token(&self, denom: &str) -> Result<FeeToken, RegistryError> {
        let table = self
            .fee_tokens
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        match table.get(denom) {
            Some(v) => Ok(v.clone()),
            None => Err(RegistryError::FeeTokenNotFound(denom.to_string())),
        }
    }

    fn set_fee_token(&self, token: FeeToken) -> Result<(), RegistryError> {
        if token.denom.is_empty() {
            return Err(RegistryError::InvalidFeeToken(
                "fee token denom is empty".to_string(),
            ));
        }
        let mut table = self
            .fee_tokens
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        table.insert(token.denom.clone(), token);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_base_denom_lookup() {
        let registry = MemoryRegistry::new("uosmo");
        assert_eq!(registry.base_denom().unwrap(), "uosmo");

        let unset = MemoryRegistry::unconfigured();
        assert_eq!(
            unset.base_denom().unwrap_err(),
            RegistryError::BaseDenomNotConfigured
        );
    }

    #[test]
    fn test_set_and_get_fee_token() {
        let registry = MemoryRegistry::new("uosmo");
        assert_eq!(
            registry.fee_token("uusdc").unwrap_err(),
            RegistryError::FeeTokenNotFound("uusdc".to_string())
        );

        registry.set_fee_token(FeeToken::new("uusdc", 2)).unwrap();
        assert_eq!(registry.fee_token("uusdc").unwrap(), FeeToken::new("uusdc", 2));

        // replacing an entry points it at the new pool
        registry.set_fee_token(FeeToken::new("uusdc", 9)).unwrap();
        assert_eq!(registry.fee_token("uusdc").unwrap().pool_id, 9);

        assert!(registry.set_fee_token(FeeToken::new("", 1)).is_err());
    }

    #[test]
    fn test_concurrent_reads() {
        let registry = Arc::new(MemoryRegistry::new("uosmo"));
        registry.set_fee_token(FeeToken::new("uusdc", 2)).unwrap();

        let mut handles = Vec::new();
        for _ in 0..8 {
            let registry = Arc::clone(&registry);
            handles.push(thread::spawn(move || {
                for _ in 0..100 {
                    assert!(registry.fee_token("uusdc").is_ok());
                    assert!(registry.base_denom().is_ok());
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }
    }
}
