//! Interactive fallback for anything not given on the command line

use inquire::{Password, PasswordDisplayMode, Select, Text};

use crate::core::{DateRange, StatsMode};
use crate::error::AppError;

use super::args::{Cli, ModeArg};

/// Source of answers for values missing from CLI and config
pub(crate) trait Prompter {
    fn api_key(&mut self) -> Result<String, AppError>;

    fn mode(&mut self) -> Result<ModeArg, AppError>;

    fn date(&mut self, label: &str) -> Result<String, AppError>;
}

/// Terminal prompts via inquire
pub(crate) struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn api_key(&mut self) -> Result<String, AppError> {
        Ok(Password::new("Enter your API Key:")
            .with_display_mode(PasswordDisplayMode::Masked)
            .without_confirmation()
            .prompt()?)
    }

    fn mode(&mut self) -> Result<ModeArg, AppError> {
        Ok(Select::new(
            "Choose statistics type:",
            vec![ModeArg::AllTime, ModeArg::Range],
        )
        .prompt()?)
    }

    fn date(&mut self, label: &str) -> Result<String, AppError> {
        Ok(Text::new(label).with_placeholder("YYYY-MM-DD").prompt()?)
    }
}

/// Everything needed before the first request goes out
#[derive(Debug)]
pub(crate) struct RunRequest {
    pub(crate) api_key: String,
    pub(crate) mode: StatsMode,
}

/// Fill in API key and statistics mode, prompting for what is missing.
///
/// Dates are validated here so a typo never costs a network round trip.
pub(crate) fn resolve_request(
    cli: &Cli,
    prompter: &mut dyn Prompter,
) -> Result<RunRequest, AppError> {
    let api_key = match cli.api_key.as_deref() {
        Some(key) => key.trim().to_string(),
        None => prompter.api_key()?.trim().to_string(),
    };
    if api_key.is_empty() {
        return Err(AppError::MissingApiKey);
    }

    let implied_range = cli.start.is_some() || cli.end.is_some();
    let mode = match cli.mode {
        Some(mode) => mode,
        None if implied_range => ModeArg::Range,
        None => prompter.mode()?,
    };

    let mode = match mode {
        ModeArg::AllTime => {
            if implied_range {
                log::warn!("Ignoring --start/--end for all-time statistics");
            }
            StatsMode::AllTime
        }
        ModeArg::Range => {
            let start = match cli.start.clone() {
                Some(s) => s,
                None => prompter.date("Enter start date (YYYY-MM-DD):")?,
            };
            let end = match cli.end.clone() {
                Some(s) => s,
                None => prompter.date("Enter end date (YYYY-MM-DD):")?,
            };
            StatsMode::Range(DateRange::parse(&start, &end)?)
        }
    };

    Ok(RunRequest { api_key, mode })
}
