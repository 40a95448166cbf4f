//! TLS client identity: a certificate bound to its decrypted private key.

use crate::{Error, Result, tls::keys};
use std::{
    fmt, fs,
    io::Cursor,
    path::Path,
    time::{SystemTime, UNIX_EPOCH},
};
use x509_parser::prelude::{FromDer, X509Certificate};
use zeroize::Zeroizing;

/// Certificate metadata extracted while validating the identity.
///
/// Used for startup logging (certificate about to expire, which subject the
/// pool authenticates as); the key material itself is never exposed.
#[derive(Debug, Clone)]
pub struct CertificateInfo {
    /// Certificate subject DN
    pub subject: String,
    /// Certificate issuer DN
    pub issuer: String,
    /// Expiry as seconds since the Unix epoch
    pub not_after_unix: i64,
}

impl CertificateInfo {
    /// Days until certificate expiration (negative if expired)
    #[must_use]
    pub fn days_until_expiry(&self) -> i64 {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| i64::try_from(d.as_secs()).unwrap_or(i64::MAX));
        self.not_after_unix.saturating_sub(now) / 86_400
    }
}

/// The certificate/key pair presented during the TLS handshake.
///
/// Built from a PEM certificate file and a passphrase-protected PEM key file.
/// The key is decrypted in memory, validated against the certificate, and held
/// in zeroize-on-drop storage; it is never written back to disk and never
/// printed. The identity is immutable once constructed and is consumed by
/// [`open_pool`](crate::open_pool).
pub struct ClientIdentity {
    cert_pem: Vec<u8>,
    key_pem: Zeroizing<Vec<u8>>,
    info: CertificateInfo,
}

impl ClientIdentity {
    /// Load and validate an identity from disk.
    ///
    /// Reads both files, decrypts the key with `passphrase` (see
    /// [`keys::decrypt_key_pem`]), and verifies that the key's public half
    /// matches the certificate's `SubjectPublicKeyInfo`, the same consistency
    /// check the TLS stack would otherwise surface mid-handshake.
    ///
    /// # Errors
    ///
    /// * [`Error::Io`] if either file cannot be read
    /// * [`Error::Format`] if the key file holds no PEM block
    /// * [`Error::Decrypt`] if the passphrase is wrong, the key is not
    ///   encrypted, or the cipher is unsupported
    /// * [`Error::KeyMismatch`] if certificate or decrypted key fail to parse,
    ///   or the pair does not match
    pub fn load(cert_path: &Path, key_path: &Path, passphrase: &[u8]) -> Result<Self> {
        let key_raw = fs::read(key_path).map_err(|e| Error::io(key_path, e))?;
        let cert_pem = fs::read(cert_path).map_err(|e| Error::io(cert_path, e))?;

        let key_pem = keys::decrypt_key_pem(&key_raw, passphrase)?;
        let key_pem = Zeroizing::new(key_pem.as_bytes().to_vec());

        let info = verify_pair(&cert_pem, &key_pem)?;

        Ok(Self {
            cert_pem,
            key_pem,
            info,
        })
    }

    /// Certificate PEM as read from disk.
    pub(crate) fn cert_pem(&self) -> &[u8] {
        &self.cert_pem
    }

    /// Decrypted, header-free key PEM. Crate-private: the key leaves this type
    /// only on its way into the connection options.
    pub(crate) fn key_pem(&self) -> &[u8] {
        &self.key_pem
    }

    /// Metadata of the client certificate.
    #[must_use]
    pub fn certificate_info(&self) -> &CertificateInfo {
        &self.info
    }
}

impl fmt::Debug for ClientIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientIdentity")
            .field("subject", &self.info.subject)
            .field("issuer", &self.info.issuer)
            .field("key_pem", &"<redacted>")
            .finish()
    }
}

/// Check that the decrypted key belongs to the certificate and collect the
/// certificate metadata.
fn verify_pair(cert_pem: &[u8], key_pem: &[u8]) -> Result<CertificateInfo> {
    let mut cert_reader = Cursor::new(cert_pem);
    let certs = rustls_pemfile::certs(&mut cert_reader)
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::KeyMismatch(format!("invalid certificate PEM: {e}")))?;
    let cert_der = certs
        .first()
        .ok_or_else(|| Error::KeyMismatch("no certificate found in certificate file".into()))?;

    let mut key_reader = Cursor::new(key_pem);
    let key_der = rustls_pemfile::private_key(&mut key_reader)
        .map_err(|e| Error::KeyMismatch(format!("invalid private key PEM: {e}")))?
        .ok_or_else(|| Error::KeyMismatch("no private key found after decryption".into()))?;

    let signing_key = rustls::crypto::ring::sign::any_supported_type(&key_der)
        .map_err(|e| Error::KeyMismatch(format!("unusable private key: {e}")))?;
    let key_spki = signing_key.public_key().ok_or_else(|| {
        Error::KeyMismatch("cannot derive a public key from the private key".into())
    })?;

    let (_, cert) = X509Certificate::from_der(cert_der.as_ref())
        .map_err(|e| Error::KeyMismatch(format!("invalid certificate: {e}")))?;

    if key_spki.as_ref() != cert.public_key().raw {
        return Err(Error::KeyMismatch(
            "certificate public key differs from the private key's public key".into(),
        ));
    }

    Ok(CertificateInfo {
        subject: cert.subject().to_string(),
        issuer: cert.issuer().to_string(),
        not_after_unix: cert.validity().not_after.to_datetime().unix_timestamp(),
    })
}
