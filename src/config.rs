use alloy_primitives::Address;
use anyhow::{Result, bail};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "sweeper")]
#[command(about = "Scan account balances across RPC endpoints and sweep native funds", long_about = None)]
pub struct Cli {
    /// Ethereum client URLs, each scanned independently
    #[arg(long = "rpc-url", env = "RPC_URL", value_delimiter = ',', required = true)]
    pub rpc_urls: Vec<String>,

    /// ERC20 contract addresses to query for every account
    #[arg(long = "contract-address", env = "CONTRACT_ADDRESS", value_delimiter = ',')]
    pub contract_addresses: Vec<Address>,

    /// Base64URL encoded private keys
    #[arg(
        long = "private-key",
        env = "PRIVATE_KEY",
        value_delimiter = ',',
        required = true,
        hide_env_values = true
    )]
    pub private_keys: Vec<String>,

    /// Destination for sweeping native balances; sweeping is off when unset
    #[arg(long = "sweep-address", env = "SWEEP_ADDRESS")]
    pub sweep_address: Option<Address>,

    /// Also sweep ERC20 balances to the sweep address
    #[arg(long = "sweep-tokens", env = "SWEEP_TOKENS", default_value_t = false)]
    pub sweep_tokens: bool,

    /// Report the native balance before token balances
    #[arg(long = "native-first", default_value_t = false)]
    pub native_first: bool,

    /// Name reported for tokens whose name() call fails
    #[arg(long = "unknown-name", default_value = "Non ERC20 strict")]
    pub unknown_name: String,

    /// Symbol reported for tokens whose symbol() call fails
    #[arg(long = "unknown-symbol", default_value = "ERC20")]
    pub unknown_symbol: String,
}

/// Immutable scan configuration, resolved once at startup and handed to the
/// orchestrator. Nothing reads ambient process state after this point.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    pub rpc_urls: Vec<String>,
    pub contract_addresses: Vec<Address>,
    pub sweep_to: Option<Address>,
    pub sweep_tokens: bool,
    pub native_first: bool,
    pub unknown_name: String,
    pub unknown_symbol: String,
}

impl Default for ScanOptions {
    fn default() -> Self {
        ScanOptions {
            rpc_urls: Vec::new(),
            contract_addresses: Vec::new(),
            sweep_to: None,
            sweep_tokens: false,
            native_first: false,
            unknown_name: "Non ERC20 strict".to_string(),
            unknown_symbol: "ERC20".to_string(),
        }
    }
}

impl Cli {
    /// Validates and freezes the CLI arguments into scan options. The zero
    /// address means "no sweep configured" and is normalized to `None`.
    pub fn into_options(self) -> Result<ScanOptions> {
        let sweep_to = self.sweep_address.filter(|addr| !addr.is_zero());

        if self.sweep_tokens && sweep_to.is_none() {
            bail!("--sweep-tokens requires a non-zero --sweep-address");
        }

        Ok(ScanOptions {
            rpc_urls: self.rpc_urls,
            contract_addresses: self.contract_addresses,
            sweep_to,
            sweep_tokens: self.sweep_tokens,
            native_first: self.native_first,
            unknown_name: self.unknown_name,
            unknown_symbol: self.unknown_symbol,
        })
    }
}
