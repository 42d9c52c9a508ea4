use clap::Parser;
use form_validator::utils::logger;
use form_validator::{AssumeYes, CliConfig, FormValidator, TerminalPrompt, ValidationOutcome};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: yes={}, input={:?}", config.yes, config.input);

    let fields = match config.field_set() {
        Ok(fields) => fields,
        Err(e) => {
            tracing::error!("Failed to load form fields: {}", e);
            eprintln!("❌ {}", e);
            return ExitCode::from(3);
        }
    };

    let prompt = TerminalPrompt::stdio();
    let outcome = if config.yes {
        FormValidator::new(AssumeYes::new(prompt)).validate(&fields)
    } else {
        FormValidator::new(prompt).validate(&fields)
    };

    match outcome {
        ValidationOutcome::Submitted => {
            println!("✅ Form submitted");
            ExitCode::SUCCESS
        }
        ValidationOutcome::Rejected(_) => ExitCode::from(1),
        ValidationOutcome::Declined => ExitCode::from(2),
    }
}
