// src/models.rs
use serde::{Deserialize, Serialize};

use crate::generators::Policy;

// Result of a generate run, one entry per password
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedPassword {
    pub password: String,
    pub length: usize,
}

impl From<String> for GeneratedPassword {
    fn from(password: String) -> Self {
        Self {
            length: password.chars().count(),
            password,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResponse {
    pub success: bool,
    pub policy: Policy,
    pub passwords: Vec<GeneratedPassword>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResponse {
    pub valid: bool,
    pub policy: Policy,
    pub error: Option<String>,
}
