use crate::credentials::SigningIdentity;
use crate::erc20::IERC20;
use crate::error::ScanError;
use crate::rpc::Endpoint;
use crate::sweep::SweepPlan;
use alloy::eips::eip2718::Encodable2718;
use alloy::network::{EthereumWallet, TransactionBuilder};
use alloy::providers::{Provider, ProviderBuilder};
use alloy::rpc::types::TransactionRequest;
use alloy_primitives::{Address, B256, U256};

/// Signs and broadcasts a native-coin sweep according to `plan`.
///
/// The transaction is built once and submitted once; a broadcast failure is
/// surfaced to the caller and never retried, since a transaction may already
/// be in flight.
pub async fn sweep_native(
    endpoint: &Endpoint,
    identity: &SigningIdentity,
    to: Address,
    plan: &SweepPlan,
) -> Result<B256, ScanError> {
    let nonce = endpoint
        .provider
        .get_transaction_count(identity.address)
        .await
        .map_err(|e| ScanError::Query {
            address: identity.address,
            reason: e.into(),
        })?;

    let tx = TransactionRequest::default()
        .with_from(identity.address)
        .with_to(to)
        .with_value(plan.net)
        .with_nonce(nonce)
        .with_gas_limit(plan.gas_limit)
        .with_gas_price(plan.gas_price)
        .with_chain_id(endpoint.chain_id);

    let wallet = EthereumWallet::from(identity.signer.clone());
    let signed = tx.build(&wallet).await.map_err(|e| ScanError::Submit {
        address: identity.address,
        reason: e.into(),
    })?;

    let pending = endpoint
        .provider
        .send_raw_transaction(&signed.encoded_2718())
        .await
        .map_err(|e| ScanError::Submit {
            address: identity.address,
            reason: e.into(),
        })?;

    Ok(*pending.tx_hash())
}

/// Sweeps an ERC20 balance via the token's transfer call. Only reachable when
/// the `sweep_tokens` capability flag is set; gas and nonce are resolved by
/// the wallet-filled provider.
pub async fn sweep_token(
    endpoint: &Endpoint,
    identity: &SigningIdentity,
    contract: Address,
    to: Address,
    amount: U256,
) -> Result<B256, ScanError> {
    let url = endpoint.url.parse().map_err(|e| ScanError::Submit {
        address: identity.address,
        reason: anyhow::anyhow!("invalid RPC URL: {e}"),
    })?;

    let wallet = EthereumWallet::from(identity.signer.clone());
    let provider = ProviderBuilder::new().wallet(wallet).connect_http(url);
    let erc20 = IERC20::new(contract, provider);

    let pending = erc20
        .transfer(to, amount)
        .send()
        .await
        .map_err(|e| ScanError::Submit {
            address: identity.address,
            reason: e.into(),
        })?;

    Ok(*pending.tx_hash())
}
