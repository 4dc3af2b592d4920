use std::{fmt, str::FromStr as _};

use alloy::{
    primitives::{Address, Signature},
    signers::{local::PrivateKeySigner, Signer as _},
};

#[derive(Debug, thiserror::Error)]
pub enum SigningError {
    #[error("Private key must start with 0x")]
    MissingPrefix,

    #[error("Invalid private key: {0}")]
    InvalidKey(String),

    #[error("Failed to sign message: {0}")]
    SignFailed(String),

    #[error("Failed to recover signer: {0}")]
    RecoverFailed(String),
}

/// Wallet key and the address derived from it. Key material never leaves
/// this type, and `Debug` only shows the address.
#[derive(Clone)]
pub struct Credential {
    signer: PrivateKeySigner,
}

impl Credential {
    /// Parses a `0x`-prefixed hex private key.
    pub fn from_private_key(private_key: &str) -> Result<Self, SigningError> {
        let private_key = private_key.trim();
        let hex = private_key
            .strip_prefix("0x")
            .ok_or(SigningError::MissingPrefix)?;
        let signer =
            PrivateKeySigner::from_str(hex).map_err(|e| SigningError::InvalidKey(e.to_string()))?;
        Ok(Self { signer })
    }

    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// EIP-191 personal-message signature over `message`.
    pub async fn sign_message(&self, message: &str) -> Result<Signature, SigningError> {
        self.signer
            .sign_message(message.as_bytes())
            .await
            .map_err(|e| SigningError::SignFailed(e.to_string()))
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("address", &format_args!("{}", self.address()))
            .finish_non_exhaustive()
    }
}

/// `0x`-prefixed `r || s || v` with v in 27/28 form.
pub fn signature_to_hex(signature: &Signature) -> String {
    bytes_to_hex(&signature.as_bytes())
}

pub fn recover_signer(message: &str, signature: &Signature) -> Result<Address, SigningError> {
    signature
        .recover_address_from_msg(message)
        .map_err(|e| SigningError::RecoverFailed(e.to_string()))
}

pub fn verify_signature(message: &str, signature: &Signature, address: Address) -> bool {
    recover_signer(message, signature).is_ok_and(|recovered| recovered == address)
}

pub fn bytes_to_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}
