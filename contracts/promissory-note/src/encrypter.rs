//! Symmetric encryption of note contents.
use aes_gcm::{
    aead::{consts::U16, generic_array::GenericArray, Aead},
    aes::Aes256,
    AesGcm, KeyInit,
};
use anyhow::{anyhow, ensure};

/// AES-256-GCM with a 16 byte nonce, so that the 16 byte initialization
/// vector supplied by clients can be used as is.
type Aes256Gcm16 = AesGcm<Aes256, U16>;

/// An entity that encrypts and decrypts payloads with a fixed key.
pub trait Encrypter {
    fn encrypt(&self, plaintext: &[u8]) -> anyhow::Result<Vec<u8>>;

    fn decrypt(&self, ciphertext: &[u8]) -> anyhow::Result<Vec<u8>>;
}

/// An [`Encrypter`] using a 32 byte AES key and a 16 byte initialization
/// vector.
///
/// Encryption is deterministic for a given key and vector, and decryption
/// fails if the ciphertext was not produced with the same key and vector.
pub struct Aes256Encrypter {
    /// Identifier of the entity, used in error messages.
    id:     String,
    cipher: Aes256Gcm16,
    nonce:  GenericArray<u8, U16>,
}

impl Aes256Encrypter {
    /// Size of the key in bytes.
    pub const KEY_SIZE: usize = 32;
    /// Size of the initialization vector in bytes.
    pub const IV_SIZE: usize = 16;

    pub fn new(id: impl Into<String>, key: &[u8], iv: &[u8]) -> anyhow::Result<Self> {
        ensure!(
            key.len() == Self::KEY_SIZE,
            "encryption key must be {} bytes, got {}",
            Self::KEY_SIZE,
            key.len()
        );
        ensure!(
            iv.len() == Self::IV_SIZE,
            "initialization vector must be {} bytes, got {}",
            Self::IV_SIZE,
            iv.len()
        );
        let cipher =
            Aes256Gcm16::new_from_slice(key).map_err(|e| anyhow!("invalid encryption key: {e}"))?;
        Ok(Self {
            id: id.into(),
            cipher,
            nonce: GenericArray::clone_from_slice(iv),
        })
    }
}

impl Encrypter for Aes256Encrypter {
    fn encrypt(&self, plaintext: &[u8]) -> anyhow::Result<Vec<u8>> {
        self.cipher
            .encrypt(&self.nonce, plaintext)
            .map_err(|_| anyhow!("{}: encryption failed", self.id))
    }

    fn decrypt(&self, ciphertext: &[u8]) -> anyhow::Result<Vec<u8>> {
        self.cipher.decrypt(&self.nonce, ciphertext).map_err(|_| {
            anyhow!("{}: decryption failed, wrong key or initialization vector", self.id)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: [u8; 32] = [7u8; 32];
    const IV: [u8; 16] = [9u8; 16];

    #[test]
    fn decrypt_inverts_encrypt() {
        let entity = Aes256Encrypter::new("ID", &KEY, &IV).expect("valid sizes");
        let ciphertext = entity.encrypt(b"<xml>note</xml>").expect("encryption works");
        assert_ne!(ciphertext, b"<xml>note</xml>".to_vec());
        assert_eq!(entity.decrypt(&ciphertext).expect("same key"), b"<xml>note</xml>".to_vec());
    }

    #[test]
    fn wrong_vector_fails_to_decrypt() {
        let entity = Aes256Encrypter::new("ID", &KEY, &IV).expect("valid sizes");
        let other = Aes256Encrypter::new("ID", &KEY, &[0u8; 16]).expect("valid sizes");
        let ciphertext = entity.encrypt(b"secret").expect("encryption works");
        assert!(other.decrypt(&ciphertext).is_err());
    }

    #[test]
    fn key_and_vector_sizes_are_checked() {
        assert!(Aes256Encrypter::new("ID", &KEY[..16], &IV).is_err());
        assert!(Aes256Encrypter::new("ID", &KEY, &IV[..12]).is_err());
    }
}
