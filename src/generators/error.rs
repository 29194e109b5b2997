// src/generators/error.rs
use thiserror::Error;

use crate::crypto::RandomnessError;
use crate::generators::alphabet::CharClass;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PolicyError {
    #[error("Minimum length {min_length} is too short for {required} required character classes, length must be at least {required}")]
    TooShort { min_length: usize, required: usize },

    #[error("Password length is {length}, must be between {min_length} and {max_length}")]
    Length {
        length: usize,
        min_length: usize,
        max_length: usize,
    },

    #[error("Password doesn't contain any {0} character")]
    MissingClass(CharClass),
}

/// The step of generation that needed a random number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawStep {
    Length,
    Fill { index: usize },
    ClassCharacter(CharClass),
    ClassPosition(CharClass),
}

impl std::fmt::Display for DrawStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DrawStep::Length => write!(f, "picking the password length"),
            DrawStep::Fill { index } => write!(f, "filling position {} from the full alphabet", index),
            DrawStep::ClassCharacter(class) => write!(f, "picking a {} character", class),
            DrawStep::ClassPosition(class) => write!(f, "picking a position for the {} character", class),
        }
    }
}

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Generator has no randomness source bound, construct it with Generator::new")]
    Configuration,

    #[error("Invalid password policy: {0}")]
    InvalidPolicy(#[from] PolicyError),

    #[error("Randomness failure while {step}: {source}")]
    Randomness {
        step: DrawStep,
        #[source]
        source: RandomnessError,
    },

    #[error("No free position left for the {class} character: length {length}, {used} positions already used")]
    NoFreePosition {
        class: CharClass,
        length: usize,
        used: usize,
    },
}

pub type Result<T> = std::result::Result<T, GenerationError>;
