// src/cli/handlers.rs
use anyhow::Context;

use crate::generators::{Generator, Policy};
use crate::models::{CheckResponse, GeneratedPassword, GenerationResponse};

// Handlers for CLI commands. A failure anywhere yields no passwords at all.
pub fn handle_generate(generator: &Generator, policy: Policy, count: usize) -> GenerationResponse {
    let result: Result<Vec<GeneratedPassword>, _> = (0..count)
        .map(|_| generator.generate(&policy).map(GeneratedPassword::from))
        .collect();

    match result {
        Ok(passwords) => GenerationResponse {
            success: true,
            policy,
            passwords,
            error: None,
        },
        Err(e) => {
            log::debug!("Generation failed: {:?}", e);
            GenerationResponse {
                success: false,
                policy,
                passwords: Vec::new(),
                error: Some(e.to_string()),
            }
        }
    }
}

pub fn handle_check(policy: Policy, password: &str) -> CheckResponse {
    match policy.validate_password(password) {
        Ok(()) => CheckResponse {
            valid: true,
            policy,
            error: None,
        },
        Err(e) => CheckResponse {
            valid: false,
            policy,
            error: Some(e.to_string()),
        },
    }
}

pub fn render_generation(response: &GenerationResponse, json: bool) -> anyhow::Result<String> {
    if json {
        return serde_json::to_string_pretty(response).context("Failed to serialize generated passwords");
    }

    Ok(match &response.error {
        Some(error) => format!("❌ {}", error),
        None => response
            .passwords
            .iter()
            .map(|p| p.password.as_str())
            .collect::<Vec<_>>()
            .join("\n"),
    })
}

pub fn render_check(response: &CheckResponse, json: bool) -> anyhow::Result<String> {
    if json {
        return serde_json::to_string_pretty(response).context("Failed to serialize check result");
    }

    Ok(match &response.error {
        Some(error) => format!("❌ {}", error),
        None => "✅ Password satisfies the policy".to_string(),
    })
}

pub fn render_policy(policy: &Policy, json: bool) -> anyhow::Result<String> {
    if json {
        return serde_json::to_string_pretty(policy).context("Failed to serialize policy");
    }

    let required: Vec<String> = policy
        .required_alphabets()
        .iter()
        .map(|r| r.class.to_string())
        .collect();

    let mut out = format!("Length: {} to {}\n", policy.min_length(), policy.max_length());
    if required.is_empty() {
        out.push_str("Required classes: none");
    } else {
        out.push_str(&format!("Required classes: {}", required.join(", ")));
    }
    if let Err(e) = policy.validate() {
        out.push_str(&format!("\n⚠️  {}", e));
    }

    Ok(out)
}
