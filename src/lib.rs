//! Bootstrap a mutually-TLS-authenticated `PostgreSQL` connection pool from a
//! passphrase-protected client key.
//!
//! The crate does three things, in order:
//!
//! 1. decrypts a legacy encrypted PEM private key and binds it to a client
//!    certificate ([`ClientIdentity`]);
//! 2. selects the trusted certificate authorities, platform roots or a
//!    caller-supplied bundle, never both ([`TrustStore`]);
//! 3. assembles connect options (network target, credentials, pool limits,
//!    fixed one-minute connect timeout, after-connect hook) and opens a live
//!    [`sqlx::PgPool`] ([`open_pool`]).
//!
//! Reading configuration, running queries, and everything after the pool is
//! handed back belong to the caller and the driver.
//!
//! # Example
//!
//! ```rust,ignore
//! use pgmtls::{ConnectionSettings, open_pool};
//!
//! let settings: ConnectionSettings = load_from_your_config_layer()?;
//! let pool = open_pool(&settings, None).await?;
//! let row: (i64,) = sqlx::query_as("SELECT 1").fetch_one(&pool).await?;
//! ```
//!
//! # Security
//!
//! When `ssl_hostname` is **not** set in the descriptor, server certificate
//! verification is **disabled entirely**: the session is encrypted and the
//! client certificate is still presented, but any server is accepted. This
//! asymmetry exists for self-signed/internal deployments that depend on it and
//! is kept on purpose; `open_pool` logs a warning whenever it is active. Set
//! `ssl_hostname` to the name on the server's certificate to get strict
//! verification.

pub mod error;
pub mod pool;
pub mod settings;
pub mod tls;

pub use error::{Error, Result};
pub use pool::{AfterConnectHook, CONNECT_TIMEOUT, ServerVerification, open_pool};
pub use settings::ConnectionSettings;
pub use tls::{ClientIdentity, TrustStore};

// The pool handle and connection type callers interact with
pub use sqlx::postgres::{PgConnection, PgPool};
