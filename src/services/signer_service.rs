//! Signer set queries

use crate::chain::felt::to_hex64;
use crate::chain::{ChainError, MultisigApi};
use crate::models::SignerOverview;

/// Fetch the current signer set and threshold.
pub async fn signer_overview(api: &dyn MultisigApi) -> Result<SignerOverview, ChainError> {
    let threshold = api.get_threshold().await?;
    let signers = api.get_signers().await?;
    Ok(SignerOverview {
        threshold,
        signers: signers.into_iter().map(to_hex64).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::testing::FakeMultisig;
    use primitive_types::U256;

    #[tokio::test]
    async fn test_overview_renders_addresses() {
        let fake = FakeMultisig {
            signers: vec![U256::from(0xabc), U256::from(0xdef)],
            threshold: 2,
            ..Default::default()
        };
        let overview = signer_overview(&fake).await.unwrap();
        assert_eq!(overview.threshold, 2);
        assert_eq!(overview.signers.len(), 2);
        assert!(overview.signers[0].ends_with("abc"));
        assert_eq!(overview.signers[0].len(), 66);
    }
}
