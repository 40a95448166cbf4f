//! Trusted certificate authorities for server verification.
//!
//! Either the platform's default trust roots or a caller-supplied CA bundle,
//! never both. An operator who wants the system roots *and* a private CA must
//! append the system roots to their bundle file explicitly.

use crate::{Error, Result};
use rustls::RootCertStore;
use std::{fs, io::Cursor, path::Path};

/// The set of certificate authorities trusted when verifying the server.
#[derive(Debug, Clone)]
pub enum TrustStore {
    /// The platform's default trust roots, probed for availability at build
    /// time; the driver loads the same native store during the handshake.
    System,
    /// A caller-supplied PEM bundle.
    Bundle {
        /// Raw PEM bytes handed to the driver
        pem: Vec<u8>,
        /// Number of certificates parsed out of the bundle
        certs: usize,
    },
}

impl TrustStore {
    /// Build the trust store for the given optional CA bundle path.
    ///
    /// `None` (or an empty path) selects the platform roots; a path selects
    /// the bundle.
    ///
    /// # Errors
    ///
    /// * [`Error::TrustStore`] if the platform store yields no usable roots
    /// * [`Error::Io`] if the bundle file cannot be read
    /// * [`Error::Format`] if the bundle contains zero valid certificates
    pub fn build(ca_file: Option<&Path>) -> Result<Self> {
        match ca_file {
            None => Self::system(),
            Some(path) if path.as_os_str().is_empty() => Self::system(),
            Some(path) => Self::from_bundle_file(path),
        }
    }

    /// Probe the platform trust store.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TrustStore`] if no usable root certificate can be
    /// loaded from the operating system.
    pub fn system() -> Result<Self> {
        let result = rustls_native_certs::load_native_certs();

        let mut store = RootCertStore::empty();
        for cert in result.certs {
            let _ = store.add_parsable_certificates(std::iter::once(cert));
        }

        if store.is_empty() {
            let detail = result
                .errors
                .first()
                .map_or_else(|| "no root certificates found".to_string(), |e| e.to_string());
            return Err(Error::TrustStore(detail));
        }

        Ok(Self::System)
    }

    /// Load a CA bundle from a PEM file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, or [`Error::Format`]
    /// if it contains zero valid certificates.
    pub fn from_bundle_file(path: &Path) -> Result<Self> {
        let pem = fs::read(path).map_err(|e| Error::io(path, e))?;
        Self::from_pem(pem)
    }

    /// Build a bundle trust store from in-memory PEM bytes.
    ///
    /// This is the injection point for tests: no filesystem, no OS store.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Format`] if the bytes contain zero valid certificates.
    pub fn from_pem(pem: Vec<u8>) -> Result<Self> {
        let mut reader = Cursor::new(&pem);
        let parsed = rustls_pemfile::certs(&mut reader)
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| Error::Format(format!("invalid CA bundle PEM: {e}")))?;

        let mut store = RootCertStore::empty();
        let mut certs = 0;
        for cert in parsed {
            let (added, _) = store.add_parsable_certificates(std::iter::once(cert));
            certs += added;
        }

        if certs == 0 {
            return Err(Error::Format(
                "CA bundle contains no valid certificates".into(),
            ));
        }

        Ok(Self::Bundle { pem, certs })
    }

    /// Whether this is the platform trust store.
    #[must_use]
    pub const fn is_system(&self) -> bool {
        matches!(self, Self::System)
    }

    /// Number of CA certificates in a bundle; `None` for the platform store.
    #[must_use]
    pub const fn certificate_count(&self) -> Option<usize> {
        match self {
            Self::System => None,
            Self::Bundle { certs, .. } => Some(*certs),
        }
    }
}
