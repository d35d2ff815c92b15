//! Password generation.

use zeroize::Zeroizing;

use super::charset::{self, ClassSet};
use crate::error::{Error, Result};
use crate::rng::{IndexSource, SecureIndex};

/// Generated password. Wiped from memory on drop.
pub type Password = Zeroizing<String>;

/// Generate a password from the OS CSPRNG.
pub fn generate(length: i64, classes: ClassSet) -> Result<Password> {
    generate_with(length, classes, &mut SecureIndex::os())
}

/// Five-flag form: `generate_flags(len, upper, lower, digits, special)`.
pub fn generate_flags(
    length: i64,
    upper: bool,
    lower: bool,
    digits: bool,
    special: bool,
) -> Result<Password> {
    generate(
        length,
        ClassSet {
            upper,
            lower,
            digits,
            special,
        },
    )
}

/// Generate a password, drawing indices from `rng`.
///
/// Fails with `InvalidArgument` before touching `rng` when no class is
/// selected or `length <= 0`. An empty selection is reported first. A length
/// whose buffer cannot be allocated fails with `LengthTooLarge`.
pub fn generate_with<S>(length: i64, classes: ClassSet, rng: &mut S) -> Result<Password>
where
    S: IndexSource + ?Sized,
{
    let pool = charset::build(classes);
    if pool.is_empty() {
        return Err(Error::InvalidArgument("no character types selected"));
    }
    if length <= 0 {
        return Err(Error::InvalidArgument("length must be positive"));
    }
    let requested = length;
    let length = usize::try_from(length).map_err(|_| Error::LengthTooLarge(requested))?;

    let mut password = Zeroizing::new(String::new());
    password
        .try_reserve_exact(length)
        .map_err(|_| Error::LengthTooLarge(requested))?;

    tracing::debug!(length, pool = pool.len(), "generating password");

    fill_from_pool(&pool, length, rng, &mut password);
    Ok(password)
}

/// Append `length` characters drawn independently, with replacement, from
/// a non-empty ASCII pool.
#[inline]
fn fill_from_pool<S>(pool: &[u8], length: usize, rng: &mut S, out: &mut String)
where
    S: IndexSource + ?Sized,
{
    out.extend((0..length).map(|_| char::from(pool[rng.next_index(pool.len())])));
}
