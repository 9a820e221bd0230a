use rand::RngCore;
use rand_core::OsRng;

use crate::error::CryptoError;
use crate::zeroizing::SecretBytes;

/// Fills `buf` from the operating system CSPRNG.
///
/// There is no fallback source. If the OS source fails the caller gets
/// [`CryptoError::EntropyUnavailable`] and must not continue.
pub fn try_fill_random(buf: &mut [u8]) -> Result<(), CryptoError> {
    OsRng
        .try_fill_bytes(buf)
        .map_err(|e| CryptoError::EntropyUnavailable(e.to_string()))
}

/// Draws `N` bytes of OS entropy into a zeroize-on-drop buffer.
pub fn try_random_secret<const N: usize>() -> Result<SecretBytes<N>, CryptoError> {
    let mut secret = SecretBytes::<N>::zeroed();
    try_fill_random(secret.as_mut_bytes())?;
    Ok(secret)
}
