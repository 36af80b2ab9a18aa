// ABOUTME: Command-line validator for exercise payloads and user-entered fields
// ABOUTME: Checks seed files before import and previews field verdicts and sanitized text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Validate an exercise engine seed file (exit code 1 when invalid)
//! tiizi-validate payload ./seed/exercises.json
//!
//! # Check one field value
//! tiizi-validate field username admin
//! tiizi-validate field pledge 25
//!
//! # Fractional pledges are accepted once exempted from the whole-number rule
//! TIIZI_INTEGER_EXEMPT_FIELDS="durationSec,Pledge amount" tiizi-validate field pledge 0.01
//!
//! # Preview sanitized text
//! tiizi-validate sanitize '<b onclick="x()">hi</b>'
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tiizi_validation::config::ValidationConfig;
use tiizi_validation::exercise_engine::{load_payload_file, validate_exercise_engine_payload};
use tiizi_validation::logging::LoggingConfig;
use tiizi_validation::validation::{
    sanitize_text, validate_bio, validate_challenge_title, validate_comment_content,
    validate_display_name, validate_group_description, validate_group_name,
    validate_post_content, validate_username, validate_workout_type, NumericInput, NumericRules,
    ValidationResult,
};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "tiizi-validate",
    about = "Tiizi input and exercise payload validator",
    long_about = "Validate exercise engine payload files and preview how user-entered fields are checked and sanitized."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Validate an exercise engine payload JSON file
    Payload {
        /// Path to the payload file
        file: PathBuf,
    },

    /// Validate a single field value
    Field {
        /// Field to validate
        field: FieldName,

        /// Raw value as typed by the user
        value: String,
    },

    /// Print the sanitized form of a text
    Sanitize {
        /// Text to sanitize
        text: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FieldName {
    Username,
    DisplayName,
    Bio,
    GroupName,
    GroupDescription,
    Post,
    Comment,
    WorkoutType,
    ChallengeTitle,
    Pledge,
}

impl FieldName {
    fn validate(self, value: &str, numeric: &NumericRules) -> ValidationResult {
        match self {
            Self::Username => validate_username(value),
            Self::DisplayName => validate_display_name(value),
            Self::Bio => validate_bio(value),
            Self::GroupName => validate_group_name(value),
            Self::GroupDescription => validate_group_description(value),
            Self::Post => validate_post_content(value),
            Self::Comment => validate_comment_content(value),
            Self::WorkoutType => validate_workout_type(value),
            Self::ChallengeTitle => validate_challenge_title(value),
            Self::Pledge => numeric.validate_pledge_amount(&NumericInput::from(value)),
        }
    }
}

fn print_json(value: &impl Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

const fn exit_code(valid: bool) -> ExitCode {
    if valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn run(command: Command) -> Result<ExitCode> {
    match command {
        Command::Payload { file } => {
            let payload = load_payload_file(&file)?;
            let verdict = validate_exercise_engine_payload(&payload);
            info!(
                file = %file.display(),
                valid = verdict.valid,
                error_count = verdict.errors.len(),
                "Payload checked"
            );
            print_json(&verdict)?;
            Ok(exit_code(verdict.valid))
        }
        Command::Field { field, value } => {
            let config = ValidationConfig::from_env()?;
            let result = field.validate(&value, &config.numeric_rules());
            print_json(&result)?;
            Ok(exit_code(result.is_valid))
        }
        Command::Sanitize { text } => {
            println!("{}", sanitize_text(&text));
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose {
        logging.verbose()
    } else {
        logging
    };
    logging.init()?;

    run(cli.command)
}
