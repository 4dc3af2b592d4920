use std::fmt;

use alloy::primitives::Address;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_DOMAIN: &str = "app.wardenprotocol.org";
pub const DEFAULT_URI: &str = "https://app.wardenprotocol.org";
pub const DEFAULT_STATEMENT: &str = "By signing, you are proving you own this wallet and logging in. This does not initiate a transaction or cost any fees.";
pub const DEFAULT_RESOURCE: &str = "https://privy.io";

/// Fixed parts of the sign-in message. The identity provider re-derives the
/// message from these, so every field must match what it expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignInConfig {
    pub domain: String,
    pub uri: String,
    pub statement: String,
    pub version: String,
    pub chain_id: u64,
    pub resources: Vec<String>,
}

impl Default for SignInConfig {
    fn default() -> Self {
        Self {
            domain: DEFAULT_DOMAIN.to_string(),
            uri: DEFAULT_URI.to_string(),
            statement: DEFAULT_STATEMENT.to_string(),
            version: "1".to_string(),
            chain_id: 1,
            resources: vec![DEFAULT_RESOURCE.to_string()],
        }
    }
}

impl SignInConfig {
    /// CAIP-2 form sent alongside the signature.
    pub fn caip2_chain_id(&self) -> String {
        format!("eip155:{}", self.chain_id)
    }
}

/// EIP-4361 message. `Display` renders the exact text that gets signed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignInMessage {
    pub domain: String,
    pub address: String,
    pub statement: String,
    pub uri: String,
    pub version: String,
    pub chain_id: u64,
    pub nonce: String,
    pub issued_at: String,
    pub resources: Vec<String>,
}

impl SignInMessage {
    pub fn new(
        config: &SignInConfig,
        address: Address,
        nonce: &str,
        issued_at: DateTime<Utc>,
    ) -> Self {
        Self {
            domain: config.domain.clone(),
            address: address.to_checksum(None),
            statement: config.statement.clone(),
            uri: config.uri.clone(),
            version: config.version.clone(),
            chain_id: config.chain_id,
            nonce: nonce.to_string(),
            issued_at: format_issued_at(issued_at),
            resources: config.resources.clone(),
        }
    }
}

impl fmt::Display for SignInMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} wants you to sign in with your Ethereum account:\n{}\n\n{}\n\nURI: {}\nVersion: {}\nChain ID: {}\nNonce: {}\nIssued At: {}",
            self.domain,
            self.address,
            self.statement,
            self.uri,
            self.version,
            self.chain_id,
            self.nonce,
            self.issued_at
        )?;
        if !self.resources.is_empty() {
            f.write_str("\nResources:")?;
            for resource in &self.resources {
                write!(f, "\n- {resource}")?;
            }
        }
        Ok(())
    }
}

/// ISO-8601 in UTC with millisecond precision, e.g. `2024-01-01T00:00:00.000Z`.
pub fn format_issued_at(issued_at: DateTime<Utc>) -> String {
    issued_at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
