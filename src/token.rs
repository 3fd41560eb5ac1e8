use crate::config::ScanOptions;
use crate::erc20::IERC20;
use crate::error::ScanError;
use crate::rpc::Endpoint;
use alloy_primitives::Address;

pub const NATIVE_NAME: &str = "Ether";
pub const NATIVE_SYMBOL: &str = "ETH";
pub const NATIVE_DECIMALS: u8 = 18;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

impl TokenMetadata {
    /// Metadata for the native coin; involves no network call.
    pub fn native() -> Self {
        TokenMetadata {
            name: NATIVE_NAME.to_string(),
            symbol: NATIVE_SYMBOL.to_string(),
            decimals: NATIVE_DECIMALS,
        }
    }

    /// Applies the degradation policy: decimals must be real, name and symbol
    /// fall back to the configured sentinels when the contract did not answer.
    fn resolve(
        decimals: u8,
        name: Option<String>,
        symbol: Option<String>,
        options: &ScanOptions,
    ) -> Self {
        TokenMetadata {
            name: name.unwrap_or_else(|| options.unknown_name.clone()),
            symbol: symbol.unwrap_or_else(|| options.unknown_symbol.clone()),
            decimals,
        }
    }
}

/// Fetches a token's metadata from one endpoint.
///
/// The decimals call is load-bearing: a wrong exponent corrupts every
/// downstream balance computation, so its failure makes the contract unusable
/// for this iteration and propagates. Name and symbol are cosmetic and
/// degrade to sentinels instead. Results are per (endpoint, contract) and
/// never cached across endpoints, since contract state can differ per chain.
pub async fn introspect(
    endpoint: &Endpoint,
    contract: Address,
    options: &ScanOptions,
) -> Result<TokenMetadata, ScanError> {
    let erc20 = IERC20::new(contract, endpoint.provider.clone());

    let decimals = erc20
        .decimals()
        .call()
        .await
        .map_err(|e| ScanError::Introspection {
            contract,
            reason: e.into(),
        })?;

    let name = erc20.name().call().await.ok();
    let symbol = erc20.symbol().call().await.ok();

    Ok(TokenMetadata::resolve(decimals, name, symbol, options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScanOptions;

    fn options() -> ScanOptions {
        ScanOptions::default()
    }

    #[test]
    fn native_triple_is_fixed() {
        let meta = TokenMetadata::native();
        assert_eq!(meta.name, "Ether");
        assert_eq!(meta.symbol, "ETH");
        assert_eq!(meta.decimals, 18);
    }

    #[test]
    fn keeps_real_metadata_when_all_calls_succeed() {
        let meta = TokenMetadata::resolve(
            6,
            Some("USD Coin".to_string()),
            Some("USDC".to_string()),
            &options(),
        );
        assert_eq!(meta.name, "USD Coin");
        assert_eq!(meta.symbol, "USDC");
        assert_eq!(meta.decimals, 6);
    }

    #[test]
    fn missing_name_degrades_to_sentinel_only() {
        let meta = TokenMetadata::resolve(8, None, Some("WBTC".to_string()), &options());
        assert_eq!(meta.name, "Non ERC20 strict");
        assert_eq!(meta.symbol, "WBTC");
        assert_eq!(meta.decimals, 8);
    }

    #[test]
    fn missing_symbol_degrades_to_sentinel_only() {
        let meta = TokenMetadata::resolve(8, Some("Wrapped BTC".to_string()), None, &options());
        assert_eq!(meta.name, "Wrapped BTC");
        assert_eq!(meta.symbol, "ERC20");
        assert_eq!(meta.decimals, 8);
    }

    #[test]
    fn sentinels_are_configurable() {
        let opts = ScanOptions {
            unknown_name: "Unknown".to_string(),
            unknown_symbol: "Unk".to_string(),
            ..ScanOptions::default()
        };
        let meta = TokenMetadata::resolve(18, None, None, &opts);
        assert_eq!(meta.name, "Unknown");
        assert_eq!(meta.symbol, "Unk");
    }
}
