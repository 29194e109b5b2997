//! Random password generation against a composition policy.
//!
//! A [`Policy`] sets length bounds and the character classes that must
//! appear. A [`Generator`] fills a password of random length from the full
//! alphabet, then overwrites one distinct random position per required class
//! so every class is present.
//!
//! ```no_run
//! use passgen::{Generator, Policy};
//!
//! let generator = Generator::new();
//! let password = generator.generate(&Policy::strong(12, 16))?;
//! assert!(password.len() >= 12);
//! # Ok::<(), passgen::GenerationError>(())
//! ```

pub mod cli;
pub mod core;
pub mod crypto;
pub mod generators;
pub mod logging;
pub mod models;

pub use crypto::{OsSource, RandomSource, RandomnessError, SeededSource};
pub use generators::{
    generate_strong, must_generate_strong, CharClass, DrawStep, GenerationError, Generator, Policy,
    PolicyError, RequiredAlphabet,
};
