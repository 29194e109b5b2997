// src/cli/menu.rs
use inquire::{Confirm, CustomType};

use crate::core::config::Config;
use crate::generators::{Generator, Policy};

pub fn run_interactive(generator: &Generator, config: &Config) -> anyhow::Result<()> {
    println!("🔐 Password generator (Ctrl+C to exit)");

    'settings: loop {
        let min_length = CustomType::<usize>::new("Minimum length:")
            .with_default(config.min_length)
            .with_error_message("Please enter a whole number")
            .prompt()?;

        let max_length = CustomType::<usize>::new("Maximum length:")
            .with_default(config.max_length.max(min_length))
            .with_error_message("Please enter a whole number")
            .prompt()?;

        let require_lowercase = Confirm::new("Require lowercase letters?")
            .with_default(config.require_lowercase)
            .prompt()?;

        let require_uppercase = Confirm::new("Require uppercase letters?")
            .with_default(config.require_uppercase)
            .prompt()?;

        let require_digit = Confirm::new("Require digits?")
            .with_default(config.require_digit)
            .prompt()?;

        let require_symbol = Confirm::new("Require symbols?")
            .with_default(config.require_symbol)
            .prompt()?;

        let policy = Policy::new(
            min_length,
            max_length,
            require_lowercase,
            require_uppercase,
            require_digit,
            require_symbol,
        );

        // Generate until the user moves on; failures send them back to the policy prompts
        loop {
            match generator.generate(&policy) {
                Ok(password) => {
                    println!("\nGenerated Password: {}\n", password);
                }
                Err(e) => {
                    println!("❌ Failed to generate password: {}", e);
                    continue 'settings;
                }
            }

            let again = Confirm::new("Generate another with the same settings?")
                .with_default(false)
                .prompt()?;

            if !again {
                break;
            }
        }

        let change = Confirm::new("Change settings and continue?")
            .with_default(false)
            .prompt()?;

        if !change {
            return Ok(());
        }
    }
}
