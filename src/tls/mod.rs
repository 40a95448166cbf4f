//! TLS material for mutually-authenticated database connections.
//!
//! # Module Organization
//!
//! - `keys` - legacy encrypted PEM private keys (decrypt, re-encode, encrypt)
//! - `identity` - the client certificate/key pair presented to the server
//! - `trust` - trusted certificate authorities (platform roots or CA bundle)
//!
//! # Example
//!
//! ```rust,ignore
//! use pgmtls::tls::{ClientIdentity, TrustStore};
//!
//! let identity = ClientIdentity::load(
//!     "/etc/ssl/client.crt".as_ref(),
//!     "/etc/ssl/client.key".as_ref(),
//!     b"passphrase",
//! )?;
//! let trust = TrustStore::build(Some("/etc/ssl/ca.pem".as_ref()))?;
//! ```

pub mod identity;
pub mod keys;
pub mod trust;

// Re-export commonly used types
pub use identity::{CertificateInfo, ClientIdentity};
pub use keys::{PemCipher, decrypt_key_pem, encrypt_key_pem};
pub use trust::TrustStore;
