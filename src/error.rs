use alloy_primitives::Address;
use thiserror::Error;

/// Failures while turning a caller-supplied private key into a signing identity.
/// All of these are fatal: the process aborts before any network activity.
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("private key is not base64url encoded (contains '+' or '/')")]
    InvalidEncoding,

    #[error("private key is not valid base64: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("decoded bytes are not a valid secp256k1 private key: {0}")]
    InvalidKey(String),
}

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("cannot represent balance {balance} with {decimals} decimals")]
    InvalidBalance { balance: String, decimals: u8 },
}

/// Errors raised during the scan traversal. Recoverability is decided by the
/// orchestrator per level: connect errors skip the endpoint, introspection
/// errors skip the contract, query/submit errors skip the account.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("failed to connect to {url}: {reason}")]
    Connect { url: String, reason: anyhow::Error },

    #[error("token call failed for contract {contract}: {reason}")]
    Introspection {
        contract: Address,
        reason: anyhow::Error,
    },

    #[error("query failed for account {address}: {reason}")]
    Query {
        address: Address,
        reason: anyhow::Error,
    },

    #[error("transfer submission failed for account {address}: {reason}")]
    Submit {
        address: Address,
        reason: anyhow::Error,
    },
}
