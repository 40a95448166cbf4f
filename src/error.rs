//! Error types for pool bootstrap.
//!
//! Every failure is returned immediately to the caller; this crate performs no
//! retries and never returns a partially-initialized pool.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building the TLS identity, the trust store, or the pool.
#[derive(Debug, Error)]
pub enum Error {
    /// A certificate, key, or CA bundle file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// Path that could not be read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Malformed PEM data (no PEM block, or a CA bundle with zero certificates).
    #[error("invalid PEM data: {0}")]
    Format(String),

    /// The private key could not be decrypted: wrong passphrase, a key file
    /// that is not actually encrypted, or an unsupported cipher.
    #[error("failed to decrypt private key: {0}")]
    Decrypt(String),

    /// The decrypted private key does not belong to the certificate, or either
    /// of them failed to parse.
    #[error("private key does not match certificate: {0}")]
    KeyMismatch(String),

    /// The platform trust store yielded no usable root certificates.
    #[error("trust store unavailable: {0}")]
    TrustStore(String),

    /// The rendered connection string could not be parsed.
    #[error("invalid connection configuration: {0}")]
    Config(String),

    /// Opening the pool failed: dial, TLS handshake, authentication, or the
    /// connect timeout elapsed.
    #[error("failed to open connection pool: {0}")]
    Connect(#[source] sqlx::Error),
}

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
