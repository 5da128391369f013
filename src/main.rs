//! termlogin - Entry Point

use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use termlogin::model::{AlertSpec, AppError, Credentials};
use termlogin::state::{FormFields, LoginState, ShortcutRouter};
use termlogin::view::{ColorConfig, FormStyles, Outcome};
use tracing::info;

/// termlogin - terminal login form
#[derive(Parser, Debug)]
#[command(name = "termlogin")]
#[command(version)]
#[command(
    about = "Terminal login form with validation, focus trapping and timed alerts",
    long_about = "Terminal login form with validation, focus trapping and timed alerts.\n\n\
                  On submit, prints {\"username\":..,\"password\":..} as one JSON line to \
                  stdout and exits 0. Exits 1 when cancelled."
)]
pub struct Args {
    /// Pre-fill the username field
    #[arg(short, long)]
    pub username: Option<String>,

    /// Show an alert above the form, as KIND:MESSAGE (info, success, warning, error).
    /// Write KIND!:MESSAGE for an alert without a close control.
    #[arg(short, long = "alert", value_name = "KIND:MESSAGE", value_parser = parse_alert)]
    pub alerts: Vec<AlertSpec>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Hide the password visibility toggle
    #[arg(long)]
    pub no_toggle: bool,
}

fn parse_alert(text: &str) -> Result<AlertSpec, String> {
    let spec = AlertSpec::parse(text);
    if spec.message.is_empty() {
        return Err("alert message must not be empty".to_string());
    }
    Ok(spec)
}

/// Write the accepted credentials as a single JSON line.
fn write_handoff<W: Write>(mut writer: W, credentials: &Credentials) -> Result<(), AppError> {
    serde_json::to_writer(&mut writer, credentials)?;
    writer
        .write_all(b"\n")
        .and_then(|()| writer.flush())
        .map_err(serde_json::Error::io)?;
    Ok(())
}

fn run(args: Args) -> Result<Outcome, AppError> {
    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        // 1. Load config file (or None if missing)
        let config_file = termlogin::config::load_config_with_precedence(args.config.clone())?;

        // 2. Merge with defaults
        let merged = termlogin::config::merge_config(config_file);

        // 3. Apply environment variable overrides
        let with_env = termlogin::config::apply_env_overrides(merged);

        // 4. Apply CLI argument overrides
        // --no-toggle only overrides when explicitly set
        let toggle_override = if args.no_toggle { Some(false) } else { None };
        termlogin::config::apply_cli_overrides(with_env, toggle_override)
    };

    // Initialize tracing with configured log file path
    termlogin::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        alerts = args.alerts.len(),
        "Configuration loaded and resolved"
    );

    let fields = match args.username {
        Some(username) => FormFields::new().with_username(username),
        None => FormFields::new(),
    };
    let state = LoginState::new(
        config.form_config(),
        fields,
        args.alerts,
        std::time::Instant::now(),
    );
    let styles = FormStyles::with_color_config(ColorConfig::from_env_and_args(args.no_color));

    let outcome = termlogin::view::run(state, ShortcutRouter::default(), styles)?;
    Ok(outcome)
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let args = Args::parse();

    match run(args)? {
        Outcome::Submitted(credentials) => {
            write_handoff(std::io::stdout().lock(), &credentials)?;
            Ok(ExitCode::SUCCESS)
        }
        Outcome::Cancelled => Ok(ExitCode::FAILURE),
    }
}
