use crate::config::ScanOptions;
use crate::credentials::SigningIdentity;
use crate::erc20::IERC20;
use crate::error::{FormatError, ScanError};
use crate::format::format_balance;
use crate::rpc::{self, Endpoint};
use crate::submit;
use crate::sweep::SweepPlan;
use crate::token::{self, TokenMetadata};
use alloy::providers::Provider;
use alloy_primitives::{Address, U256};
use anyhow::{Result, bail};
use tokio::sync::watch;
use tracing::{error, info, warn};

/// Drives the endpoint → account → contract traversal.
///
/// Each level has its own failure domain: an unreachable endpoint is skipped,
/// a misbehaving token contract is skipped for that account, and a failing
/// balance query or sweep submission skips the account on that endpoint. The
/// shutdown flag is checked between iterations so an interrupt drains the
/// traversal instead of killing it mid-call.
pub struct Scanner {
    options: ScanOptions,
    identities: Vec<SigningIdentity>,
    shutdown: watch::Receiver<bool>,
}

impl Scanner {
    pub fn new(
        options: ScanOptions,
        identities: Vec<SigningIdentity>,
        shutdown: watch::Receiver<bool>,
    ) -> Self {
        Scanner {
            options,
            identities,
            shutdown,
        }
    }

    fn cancelled(&self) -> bool {
        *self.shutdown.borrow()
    }

    pub async fn run(&self) -> Result<()> {
        if let Some(to) = self.options.sweep_to {
            info!("Sweeping all accounts to {}", to);
        }

        let mut attempted = 0usize;
        let mut reachable = 0usize;
        for url in &self.options.rpc_urls {
            if self.cancelled() {
                break;
            }

            attempted += 1;
            match rpc::connect(url).await {
                Ok(endpoint) => {
                    reachable += 1;
                    self.scan_endpoint(&endpoint).await;
                }
                Err(e) => warn!("{e}"),
            }
        }

        if self.cancelled() {
            info!("Scan cancelled, shutting down");
        } else if reachable == 0 && attempted > 0 {
            bail!("no reachable endpoint among {attempted} configured");
        }
        Ok(())
    }

    async fn scan_endpoint(&self, endpoint: &Endpoint) {
        for identity in &self.identities {
            if self.cancelled() {
                return;
            }
            if let Err(e) = self.scan_account(endpoint, identity).await {
                error!("{e}");
            }
        }
    }

    async fn scan_account(
        &self,
        endpoint: &Endpoint,
        identity: &SigningIdentity,
    ) -> Result<(), ScanError> {
        if self.options.native_first {
            self.scan_native(endpoint, identity).await?;
            self.scan_tokens(endpoint, identity).await;
        } else {
            self.scan_tokens(endpoint, identity).await;
            self.scan_native(endpoint, identity).await?;
        }
        Ok(())
    }

    async fn scan_tokens(&self, endpoint: &Endpoint, identity: &SigningIdentity) {
        for &contract in &self.options.contract_addresses {
            if self.cancelled() {
                return;
            }
            if let Err(e) = self.scan_token(endpoint, identity, contract).await {
                warn!("{e}");
            }
        }
    }

    async fn scan_token(
        &self,
        endpoint: &Endpoint,
        identity: &SigningIdentity,
        contract: Address,
    ) -> Result<(), ScanError> {
        let erc20 = IERC20::new(contract, endpoint.provider.clone());
        let balance = erc20
            .balanceOf(identity.address)
            .call()
            .await
            .map_err(|e| ScanError::Introspection {
                contract,
                reason: e.into(),
            })?;

        // Zero token balances are not reported.
        if balance.is_zero() {
            return Ok(());
        }

        let meta = token::introspect(endpoint, contract, &self.options).await?;

        println!("{} [{}]:", meta.name, contract);
        let line = balance_line(identity.address, &meta, balance).map_err(|e| {
            ScanError::Introspection {
                contract,
                reason: e.into(),
            }
        })?;
        println!("{line}");

        if self.options.sweep_tokens
            && let Some(to) = self.options.sweep_to
        {
            let hash = submit::sweep_token(endpoint, identity, contract, to, balance).await?;
            info!(
                "Sweeping {} {} from {} to {} [{}]",
                balance, meta.symbol, identity.address, to, hash
            );
        }

        Ok(())
    }

    async fn scan_native(
        &self,
        endpoint: &Endpoint,
        identity: &SigningIdentity,
    ) -> Result<(), ScanError> {
        let balance = endpoint
            .provider
            .get_balance(identity.address)
            .await
            .map_err(|e| ScanError::Query {
                address: identity.address,
                reason: e.into(),
            })?;

        if balance.is_zero() {
            return Ok(());
        }

        let meta = TokenMetadata::native();
        let line = balance_line(identity.address, &meta, balance).map_err(|e| ScanError::Query {
            address: identity.address,
            reason: e.into(),
        })?;
        println!("{line}");

        if let Some(to) = self.options.sweep_to {
            self.sweep_native(endpoint, identity, to, balance).await?;
        }

        Ok(())
    }

    async fn sweep_native(
        &self,
        endpoint: &Endpoint,
        identity: &SigningIdentity,
        to: Address,
        balance: U256,
    ) -> Result<(), ScanError> {
        let gas_price = endpoint
            .provider
            .get_gas_price()
            .await
            .map_err(|e| ScanError::Query {
                address: identity.address,
                reason: e.into(),
            })?;

        match SweepPlan::new(balance, gas_price) {
            None => {
                warn!(
                    "Skipping sweep for {}: fee covers the whole balance of {}",
                    identity.address, balance
                );
            }
            Some(plan) => {
                let hash = submit::sweep_native(endpoint, identity, to, &plan).await?;
                info!(
                    "Sweeping amount: {} ({} gas price) [{}]",
                    plan.net, plan.gas_price, hash
                );
            }
        }

        Ok(())
    }
}

/// One report line: `<address>, balance: <decimal value> <symbol>`.
fn balance_line(
    address: Address,
    meta: &TokenMetadata,
    balance: U256,
) -> Result<String, FormatError> {
    let value = format_balance(balance, meta.decimals)?;
    Ok(format!("{}, balance: {} {}", address, value, meta.symbol))
}
