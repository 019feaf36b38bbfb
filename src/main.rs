// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! tcx-collapse command line
//!
//! Collapses multi-activity TCX workout exports into a single activity and
//! optionally uploads the result to Strava.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tcx_collapse::config::Config;
use tcx_collapse::services::strava::is_supported_sport_type;
use tcx_collapse::services::{
    FileOutcome, FileReport, StravaClient, UploadRequest, WorkoutProcessor,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "tcx-collapse", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the Strava authorization link
    Authorize,
    /// Collapse files without uploading
    Convert(FileArgs),
    /// Collapse files and upload them to Strava
    Upload(UploadArgs),
}

#[derive(Args)]
struct FileArgs {
    /// TCX files to collapse
    #[arg(required = true)]
    files: Vec<PathBuf>,
    /// Directory for collapsed files (default: $OUTPUT_DIR or ./output)
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

#[derive(Args)]
struct UploadArgs {
    #[command(flatten)]
    files: FileArgs,
    /// Authorization code from the Strava redirect
    #[arg(long, conflicts_with = "token", required_unless_present = "token")]
    code: Option<String>,
    /// Existing access token with activity:write scope
    #[arg(long)]
    token: Option<String>,
    /// Activity name (default: $ACTIVITY_NAME)
    #[arg(long)]
    name: Option<String>,
    /// Strava sport type (default: $SPORT_TYPE)
    #[arg(long)]
    sport_type: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!(error = %e, "tcx-collapse failed");
            ExitCode::FAILURE
        }
    }
}

/// Returns `Ok(false)` when at least one file failed.
async fn run(cli: Cli) -> anyhow::Result<bool> {
    let config = Config::from_env()?;

    match cli.command {
        Command::Authorize => {
            let client = StravaClient::new(config.strava_client_id()?.to_string(), String::new());
            println!("{}", client.authorize_url(&config.redirect_uri));
            Ok(true)
        }
        Command::Convert(args) => {
            let processor = processor_for(&config, &args);
            let reports = processor.process_all(&args.files, None).await;
            Ok(summarize(&reports))
        }
        Command::Upload(args) => {
            let sport_type = args.sport_type.unwrap_or_else(|| config.sport_type.clone());
            if !is_supported_sport_type(&sport_type) {
                anyhow::bail!("Unsupported sport type: {sport_type}");
            }

            let client_id = config.strava_client_id()?.to_string();
            let (client, access_token) = match (args.token, args.code) {
                (Some(token), _) => (StravaClient::new(client_id, String::new()), token),
                (None, Some(code)) => {
                    let client =
                        StravaClient::new(client_id, config.strava_client_secret()?.to_string());
                    let token = client.exchange_code(&code).await?.access_token;
                    (client, token)
                }
                (None, None) => anyhow::bail!("Either --code or --token is required"),
            };

            let request = UploadRequest {
                access_token,
                name: args.name.unwrap_or_else(|| config.activity_name.clone()),
                sport_type,
            };

            let processor = processor_for(&config, &args.files);
            let reports = processor
                .process_all(&args.files.files, Some((&client, &request)))
                .await;
            Ok(summarize(&reports))
        }
    }
}

fn processor_for(config: &Config, args: &FileArgs) -> WorkoutProcessor {
    WorkoutProcessor::new(
        args.output_dir
            .clone()
            .unwrap_or_else(|| config.output_dir.clone()),
    )
}

/// Print one line per file; true if every file succeeded.
fn summarize(reports: &[FileReport]) -> bool {
    let mut all_ok = true;
    for report in reports {
        match &report.outcome {
            Ok(FileOutcome::Converted(w)) => println!(
                "{}: {} activities -> {} ({} track points)",
                report.input.display(),
                w.activities_merged,
                w.output.display(),
                w.track_points
            ),
            Ok(FileOutcome::Uploaded(u)) => println!(
                "{}: uploaded as {} ({})",
                report.input.display(),
                u.upload.id,
                u.upload.status
            ),
            Err(e) => {
                all_ok = false;
                eprintln!("{}: {}", report.input.display(), e);
            }
        }
    }
    all_ok
}

/// Initialize structured JSON logging on stderr.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    let filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive("info".parse().expect("static directive"))
        .add_directive("tcx_collapse=debug".parse().expect("static directive"));

    tracing_subscriber::registry().with(filter).with(format).init();
}
