//! OpenSSH-style SHA-256 host key fingerprints.

use base64::Engine as _;
use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD};
use hostkeys_common::HostKey;
use sha2::{Digest, Sha256};

use crate::domain::error::FingerprintError;

/// Computes `SHA256:<unpadded base64>` over the decoded key blob, the same
/// string `ssh-keygen -lf` prints.
///
/// # Errors
///
/// Returns [`FingerprintError::InvalidMaterial`] if the key material is not
/// valid base64.
pub fn sha256_fingerprint(key: &HostKey) -> Result<String, FingerprintError> {
    let blob = STANDARD
        .decode(&key.material)
        .map_err(|source| FingerprintError::InvalidMaterial {
            algorithm: key.algorithm.clone(),
            source,
        })?;
    let digest = Sha256::digest(&blob);
    Ok(format!("SHA256:{}", STANDARD_NO_PAD.encode(digest)))
}
