// src/generators/mod.rs
pub mod alphabet;
pub mod error;
pub mod password;
pub mod policy;

pub use alphabet::{CharClass, RequiredAlphabet};
pub use error::{DrawStep, GenerationError, PolicyError};
pub use password::Generator;
pub use policy::Policy;

/// Generates a password requiring every character class, using the
/// operating system CSPRNG.
pub fn generate_strong(min_length: usize, max_length: usize) -> error::Result<String> {
    let generator = Generator::new();
    let policy = Policy::strong(min_length, max_length);

    generator.generate(&policy)
}

/// Like [`generate_strong`], for callers where a bad length is a bug.
///
/// # Panics
///
/// Panics if generation fails, e.g. when `min_length` is below 4 or the
/// operating system cannot provide randomness.
pub fn must_generate_strong(min_length: usize, max_length: usize) -> String {
    match generate_strong(min_length, max_length) {
        Ok(password) => password,
        Err(e) => panic!("failed to generate strong password: {}", e),
    }
}
