//! Identifier generation for to-do records.
//!
//! Ids are 6 bytes from the OS CSPRNG rendered as 12 lowercase hex characters.
//! No uniqueness check happens here; stores reject collisions on insert.

use crate::error::Result;
use rand::rngs::OsRng;
use rand::RngCore;

/// Number of random bytes in an id.
pub const ID_BYTES: usize = 6;

/// Length of the rendered id string.
pub const ID_LEN: usize = ID_BYTES * 2;

/// Generate a fresh id.
///
/// Fails with [`crate::error::TodoError::RandomSource`] if the OS entropy source
/// cannot be read. There is no fallback to a weaker generator.
pub fn generate() -> Result<String> {
    generate_with(&mut OsRng)
}

pub(crate) fn generate_with<R: RngCore>(rng: &mut R) -> Result<String> {
    let mut bytes = [0u8; ID_BYTES];
    rng.try_fill_bytes(&mut bytes)?;
    Ok(hex::encode(bytes))
}
