use std::path::Path;
use std::process::ExitCode;

use clap::Parser;

use passgen::cli::handlers::{handle_check, handle_generate, render_check, render_generation, render_policy};
use passgen::cli::{menu, Args, CliCommand, PolicyArgs};
use passgen::core::config::{parse_level, Config};
use passgen::{logging, Generator, SeededSource};

fn main() -> anyhow::Result<ExitCode> {
    // Load environment variables
    let env_loaded = Path::new(".env").exists() && dotenvy::dotenv().is_ok();

    let args = Args::parse();

    let mut config = Config::load();
    if let Some(level) = args.log_level.as_deref().and_then(parse_level) {
        config.log_level = level;
    }

    logging::init(config.log_level);
    log::debug!("Loaded .env file: {}", env_loaded);
    log::debug!("Loaded config: {:?}", config);

    let json = args.json;
    let command = args.command.unwrap_or(CliCommand::Generate {
        policy: PolicyArgs::default(),
        count: None,
        seed: None,
    });

    match command {
        CliCommand::Generate { policy, count, seed } => {
            let policy = policy.resolve(&config);
            let generator = match seed {
                Some(seed) => {
                    log::warn!("Using seeded randomness, output is reproducible and must not be used as real passwords");
                    Generator::with_source(SeededSource::new(seed))
                }
                None => Generator::new(),
            };

            let response = handle_generate(&generator, policy, count.unwrap_or(config.count));
            println!("{}", render_generation(&response, json)?);

            Ok(exit_code(response.success))
        }
        CliCommand::Check { password, policy } => {
            let response = handle_check(policy.resolve(&config), &password);
            println!("{}", render_check(&response, json)?);

            Ok(exit_code(response.valid))
        }
        CliCommand::Policy { policy } => {
            println!("{}", render_policy(&policy.resolve(&config), json)?);
            Ok(ExitCode::SUCCESS)
        }
        CliCommand::Interactive => {
            let generator = Generator::new();
            menu::run_interactive(&generator, &config)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn exit_code(success: bool) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
