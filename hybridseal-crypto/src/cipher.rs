//! AES-256-CBC with PKCS#7 padding over a fresh per-envelope key.

use aes::Aes256;
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use rand::RngCore;
use rand::rngs::OsRng;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::error::FailureCause;

/// Symmetric key size in bytes (AES-256).
pub const SYMMETRIC_KEY_SIZE: usize = 32;

/// CBC initialization vector size in bytes.
pub const IV_SIZE: usize = 16;

/// AES block size in bytes.
pub const BLOCK_SIZE: usize = 16;

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// A 256-bit key that lives for a single envelope.
///
/// Wiped on drop. Only its wrapped form ever leaves the crate.
#[derive(Zeroize, ZeroizeOnDrop)]
pub(crate) struct SymmetricKey([u8; SYMMETRIC_KEY_SIZE]);

impl SymmetricKey {
    pub(crate) fn generate() -> Result<Self, FailureCause> {
        let mut bytes = [0u8; SYMMETRIC_KEY_SIZE];
        OsRng.try_fill_bytes(&mut bytes)?;
        Ok(Self(bytes))
    }

    pub(crate) fn from_slice(bytes: &[u8]) -> Option<Self> {
        let bytes: [u8; SYMMETRIC_KEY_SIZE] = bytes.try_into().ok()?;
        Some(Self(bytes))
    }

    pub(crate) fn as_bytes(&self) -> &[u8; SYMMETRIC_KEY_SIZE] {
        &self.0
    }
}

pub(crate) fn generate_iv() -> Result<[u8; IV_SIZE], FailureCause> {
    let mut iv = [0u8; IV_SIZE];
    OsRng.try_fill_bytes(&mut iv)?;
    Ok(iv)
}

pub(crate) fn encrypt(
    key: &SymmetricKey,
    iv: &[u8; IV_SIZE],
    plaintext: &[u8],
) -> Result<Vec<u8>, FailureCause> {
    let cipher = Aes256CbcEnc::new_from_slices(key.as_bytes(), iv)
        .map_err(|_| FailureCause::CipherInit)?;
    Ok(cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
}

/// Decrypts and strips PKCS#7 padding. The result is wiped on drop.
pub(crate) fn decrypt(
    key: &SymmetricKey,
    iv: &[u8],
    ciphertext: &[u8],
) -> Result<Zeroizing<Vec<u8>>, FailureCause> {
    let cipher =
        Aes256CbcDec::new_from_slices(key.as_bytes(), iv).map_err(|_| FailureCause::CipherInit)?;
    cipher
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map(Zeroizing::new)
        .map_err(|_| FailureCause::Padding)
}
