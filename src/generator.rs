//! Random password generation.
//!
//! A generated password always contains at least one uppercase letter,
//! one lowercase letter, one digit and one symbol: the first four
//! characters are drawn from those classes in that order.  Every
//! remaining character picks a random class, then a random member.

use rand::Rng;

use crate::errors::{PwdManagerError, Result};

/// Shortest password the generator will produce.
pub const MIN_LENGTH: usize = 8;

/// Longest password the generator will produce.
pub const MAX_LENGTH: usize = 32;

const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"~!@#$%&*()-_=+[]|;:',<.>/?";

/// The character classes, in the order the mandatory prefix uses them.
pub const CLASSES: [&[u8]; 4] = [UPPERCASE, LOWERCASE, DIGITS, SYMBOLS];

/// Check that `length` is within `MIN_LENGTH..=MAX_LENGTH`.
pub fn validate_length(length: usize) -> Result<()> {
    if (MIN_LENGTH..=MAX_LENGTH).contains(&length) {
        Ok(())
    } else {
        Err(PwdManagerError::InvalidLength {
            got: length,
            min: MIN_LENGTH,
            max: MAX_LENGTH,
        })
    }
}

/// Generate a password of `length` characters with the thread-local RNG.
pub fn generate_password(length: usize) -> Result<String> {
    generate_password_with(&mut rand::rng(), length)
}

/// Generate a password with a caller-supplied RNG.
pub fn generate_password_with<R: Rng + ?Sized>(rng: &mut R, length: usize) -> Result<String> {
    validate_length(length)?;

    let mut password = String::with_capacity(length);
    for class in CLASSES {
        password.push(pick(rng, class));
    }
    for _ in CLASSES.len()..length {
        let class = CLASSES[rng.random_range(0..CLASSES.len())];
        password.push(pick(rng, class));
    }

    Ok(password)
}

fn pick<R: Rng + ?Sized>(rng: &mut R, class: &[u8]) -> char {
    char::from(class[rng.random_range(0..class.len())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn in_class(c: char, class: &[u8]) -> bool {
        c.is_ascii() && class.contains(&(c as u8))
    }

    #[test]
    fn generates_requested_length() {
        for length in [MIN_LENGTH, 16, MAX_LENGTH] {
            assert_eq!(generate_password(length).unwrap().chars().count(), length);
        }
    }

    #[test]
    fn rejects_out_of_range_lengths() {
        assert!(matches!(
            generate_password(7),
            Err(PwdManagerError::InvalidLength { got: 7, .. })
        ));
        assert!(generate_password(33).is_err());
        assert!(generate_password(0).is_err());
    }

    #[test]
    fn prefix_covers_every_class() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let pw: Vec<char> = generate_password_with(&mut rng, 12).unwrap().chars().collect();
            for (c, class) in pw.iter().zip(CLASSES) {
                assert!(in_class(*c, class), "{c} not in expected class");
            }
        }
    }

    #[test]
    fn every_character_is_from_some_class() {
        let mut rng = StdRng::seed_from_u64(42);
        let pw = generate_password_with(&mut rng, MAX_LENGTH).unwrap();
        assert!(pw
            .chars()
            .all(|c| CLASSES.iter().any(|class| in_class(c, class))));
    }

    #[test]
    fn same_seed_same_password() {
        let a = generate_password_with(&mut StdRng::seed_from_u64(1), 20).unwrap();
        let b = generate_password_with(&mut StdRng::seed_from_u64(1), 20).unwrap();
        assert_eq!(a, b);
    }
}
