#![allow(dead_code, clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use pgmtls::ConnectionSettings;
use pgmtls::tls::{PemCipher, encrypt_key_pem};
use std::{env, path::PathBuf};
use tempfile::TempDir;

/// Passphrase used for generated test keys
pub const PASSPHRASE: &[u8] = b"correct horse battery staple";

/// A generated client identity written to disk: certificate PEM plus the
/// matching private key encrypted with [`PASSPHRASE`].
pub struct TestIdentity {
    /// Owns the directory; dropping it removes the files
    pub dir: TempDir,
    pub cert_path: PathBuf,
    pub key_path: PathBuf,
    /// The plaintext PKCS#8 DER of the key, for round-trip assertions
    pub key_der: Vec<u8>,
}

/// Generate a self-signed identity for `hostname` and write it to a tempdir,
/// the key encrypted with the given cipher.
pub fn generate_identity(hostname: &str, cipher: PemCipher) -> TestIdentity {
    let key = rcgen::KeyPair::generate().unwrap();
    let cert = rcgen::CertificateParams::new(vec![hostname.to_string()])
        .unwrap()
        .self_signed(&key)
        .unwrap();
    let key_der = key.serialize_der();

    let dir = tempfile::tempdir().unwrap();
    let cert_path = dir.path().join("client.crt");
    let key_path = dir.path().join("client.key");

    std::fs::write(&cert_path, cert.pem()).unwrap();
    std::fs::write(
        &key_path,
        encrypt_key_pem("PRIVATE KEY", &key_der, PASSPHRASE, cipher).unwrap(),
    )
    .unwrap();

    TestIdentity {
        dir,
        cert_path,
        key_path,
        key_der,
    }
}

/// A freshly generated CA certificate PEM, unrelated to anything else.
pub fn unrelated_ca_pem() -> String {
    let key = rcgen::KeyPair::generate().unwrap();
    rcgen::CertificateParams::new(vec!["unrelated-ca".to_string()])
        .unwrap()
        .self_signed(&key)
        .unwrap()
        .pem()
}

/// Settings for the live TLS `PostgreSQL` used by the `#[ignore]`d tests.
///
/// Defaults match the fixture layout produced by `scripts/setup-tls-tests.sh`;
/// every field can be overridden through `PGMTLS_TEST_*` environment
/// variables.
pub fn live_settings() -> ConnectionSettings {
    let var = |name: &str, default: &str| env::var(name).unwrap_or_else(|_| default.to_string());

    ConnectionSettings {
        db_host: var("PGMTLS_TEST_DB_HOST", "localhost"),
        db_port: env::var("PGMTLS_TEST_DB_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(5432),
        db_name: var("PGMTLS_TEST_DB_NAME", "testdb"),
        db_user: var("PGMTLS_TEST_DB_USER", "postgres"),
        db_password: var("PGMTLS_TEST_DB_PASSWORD", "secret"),
        ssl_mode: "require".to_string(),
        ssl_cert_file: var("PGMTLS_TEST_CLIENT_CERT", ".certs/postgres/client.crt").into(),
        ssl_key_file: var("PGMTLS_TEST_CLIENT_KEY", ".certs/postgres/client.key").into(),
        ssl_key_passphrase: var("PGMTLS_TEST_KEY_PASSPHRASE", "secret"),
        ssl_ca_file: Some(var("PGMTLS_TEST_CA_CERT", ".certs/postgres/ca.crt").into()),
        ssl_hostname: None,
        max_conns: 10,
    }
}
