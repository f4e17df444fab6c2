use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Result};
use clap::Parser;
use colored::Colorize;
use connect_settings::config::{load_settings_file, ClientSettings, Region, SettingsFile};
use connect_settings::env::{load_environment, read_credential_vars, resolve_credential};
use connect_settings::executor::{fetch_settings, print_request_plan, report_response};
use connect_settings::FetchError;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "connect-settings",
    version,
    about = "Fetch Garmin Connect user settings using ACCESS_TOKEN or COOKIE_STRING",
    disable_help_subcommand = true
)]
struct Cli {
    /// Deployment host preset
    #[arg(long, value_enum)]
    region: Option<Region>,

    /// Override the API base URL (takes precedence over --region)
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Connection timeout in seconds [default: 10]
    #[arg(long, value_name = "SECS")]
    connect_timeout: Option<u64>,

    /// Total request timeout in seconds [default: 20]
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Settings file, or directory containing connect-settings.json
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Env file providing ACCESS_TOKEN or COOKIE_STRING
    #[arg(short, long)]
    env_file: Option<PathBuf>,

    /// Exit with status 2 when the server answers with anything but 200
    #[arg(long)]
    fail_on_status: bool,

    /// Log request details to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn settings_layer(&self) -> SettingsFile {
        SettingsFile {
            region: self.region,
            base_url: self.base_url.clone(),
            connect_timeout_secs: self.connect_timeout,
            request_timeout_secs: self.timeout,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let process = read_credential_vars(|key| std::env::var(key))?;
    let env = load_environment(cli.env_file.as_deref(), process)?;
    let credential = match resolve_credential(&env) {
        Ok(credential) => credential,
        Err(FetchError::MissingCredential) => {
            print_usage();
            return Ok(ExitCode::FAILURE);
        }
        Err(err) => return Err(err.into()),
    };
    debug!(?credential, "resolved credential");

    let settings = resolve_settings(&cli)?;
    let url = settings.endpoint()?;
    {
        let mut out = io::stdout().lock();
        print_request_plan(&mut out, credential.mode(), &url)?;
        out.flush()?;
    }

    let result = fetch_settings(&settings, &credential).await?;
    let report = report_response(&result, &mut io::stdout().lock(), &mut io::stderr().lock())?;
    debug!(?report, "response reported");

    if cli.fail_on_status && !report.is_success() {
        return Ok(ExitCode::from(2));
    }
    Ok(ExitCode::SUCCESS)
}

fn resolve_settings(cli: &Cli) -> Result<ClientSettings> {
    let target = cli.config.as_deref().unwrap_or(Path::new("."));
    let loaded = load_settings_file(target)?;
    if loaded.is_none() {
        if let Some(explicit) = &cli.config {
            bail!("settings file {} not found", explicit.display());
        }
    }
    if let Some(file) = &loaded {
        debug!(path = %file.path.display(), "loaded settings file");
    }

    let cli_layer = cli.settings_layer();
    let layers = loaded
        .as_ref()
        .map(|file| &file.settings)
        .into_iter()
        .chain(std::iter::once(&cli_layer));
    Ok(ClientSettings::resolve(layers)?)
}

fn print_usage() {
    eprintln!("Please set ACCESS_TOKEN or COOKIE_STRING environment variable.");
    eprintln!("  ACCESS_TOKEN   bearer token for the Authorization header");
    eprintln!("  COOKIE_STRING  raw Cookie header copied from an authenticated browser session,");
    eprintln!("                 e.g. \"session-id=...; other-cookie=...\"");
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "connect_settings=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
