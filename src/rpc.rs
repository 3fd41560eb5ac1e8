use crate::error::ScanError;
use alloy::providers::fillers::FillProvider;
use alloy::providers::{Provider, ProviderBuilder};
use tracing::info;

pub type HttpProvider = FillProvider<
    alloy::providers::fillers::JoinFill<
        alloy::providers::Identity,
        alloy::providers::fillers::JoinFill<
            alloy::providers::fillers::GasFiller,
            alloy::providers::fillers::JoinFill<
                alloy::providers::fillers::BlobGasFiller,
                alloy::providers::fillers::JoinFill<
                    alloy::providers::fillers::NonceFiller,
                    alloy::providers::fillers::ChainIdFiller,
                >,
            >,
        >,
    >,
    alloy::providers::RootProvider,
>;

/// A live connection to one RPC endpoint. Endpoints are independent: each is
/// connected at the start of its own scan pass and abandoned afterwards.
pub struct Endpoint {
    pub url: String,
    pub provider: HttpProvider,
    pub chain_id: u64,
}

/// Connects to an endpoint and resolves its chain id. Both steps share the
/// connect failure domain: either failing skips this endpoint only.
pub async fn connect(url: &str) -> Result<Endpoint, ScanError> {
    let parsed = url.parse().map_err(|e| ScanError::Connect {
        url: url.to_string(),
        reason: anyhow::anyhow!("invalid RPC URL: {e}"),
    })?;

    let provider: HttpProvider = ProviderBuilder::new().connect_http(parsed);
    let chain_id = provider
        .get_chain_id()
        .await
        .map_err(|e| ScanError::Connect {
            url: url.to_string(),
            reason: e.into(),
        })?;

    info!("Connected to {} [chain id: {}]", url, chain_id);

    Ok(Endpoint {
        url: url.to_string(),
        provider,
        chain_id,
    })
}
