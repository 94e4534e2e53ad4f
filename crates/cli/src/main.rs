// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use chef_booking::{CoreError, TransitionResult, WizardCommand, WizardEvent, WizardState, apply};
use chef_booking_api::{
    Address, ApiError, BackendConfig, Booking, BookingService, BookingWizard, CloseOutcome,
    ClosePolicy, HttpBackend, Provider, ProviderDirectory, SubmissionOutcome, addresses_or_empty,
    hydrate, to_payload,
};
use chef_booking_domain::{BookingDraft, WizardStep, step_blockers, validate_standalone_guest_count};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};

/// Chef Booking - drive the chef booking wizard from the command line
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Base URL of the booking backend
    #[arg(long, env = "CHEF_BOOKING_API_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    /// Bearer token for the booking backend
    #[arg(long, env = "CHEF_BOOKING_API_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Per-request timeout in seconds. No timeout if omitted.
    #[arg(long)]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Walk a draft through the wizard and report what blocks each step
    Check {
        /// Path to a booking draft JSON file
        draft: PathBuf,
    },
    /// Print the submission payload for a draft
    Payload {
        /// Path to a booking draft JSON file
        draft: PathBuf,
    },
    /// List saved addresses
    Addresses,
    /// List service providers
    Providers,
    /// Fetch a booking and print it as a draft
    Show {
        /// Remote booking identifier
        booking_id: String,
    },
    /// Submit a draft. Ctrl-C aborts the request.
    Submit {
        /// Path to a booking draft JSON file
        draft: PathBuf,
        /// Update this booking instead of creating a new one
        #[arg(long)]
        booking_id: Option<String>,
    },
}

impl Args {
    fn backend_config(&self) -> BackendConfig {
        let mut config: BackendConfig = BackendConfig::new(self.base_url.clone());
        if let Some(token) = &self.token {
            config = config.with_auth_token(token.clone());
        }
        if let Some(secs) = self.timeout_secs {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        config
    }
}

/// Per-step result of checking a draft.
#[derive(Debug, Serialize)]
struct StepReport {
    step: u8,
    title: &'static str,
    /// Skipped by the meal-planning branch.
    bypassed: bool,
    blockers: Vec<String>,
}

/// Result of checking a draft.
#[derive(Debug, Serialize)]
struct CheckReport {
    steps: Vec<StepReport>,
    /// Furthest step reachable by advancing from the first one.
    reached: u8,
    ready_to_submit: bool,
    /// Set when the guest count fails the standalone guest page's rule.
    standalone_guest_issue: Option<String>,
}

fn check_draft(draft: &BookingDraft) -> Result<CheckReport, CoreError> {
    let steps: Vec<StepReport> = WizardStep::ALL
        .iter()
        .map(|step| StepReport {
            step: step.index(),
            title: step.title(),
            bypassed: step.is_bypassed(draft.is_meal_config_skipped),
            blockers: step_blockers(*step, draft, false)
                .iter()
                .map(ToString::to_string)
                .collect(),
        })
        .collect();

    let mut state: WizardState = WizardState {
        draft: draft.clone(),
        ..WizardState::new()
    };
    while state.current_step != WizardStep::LAST {
        let result: TransitionResult = apply(&state, WizardCommand::Advance)?;
        if matches!(result.event, WizardEvent::AdvanceBlocked { .. }) {
            break;
        }
        state = result.new_state;
    }
    let ready_to_submit: bool = apply(&state, WizardCommand::BeginSubmission).is_ok();

    Ok(CheckReport {
        steps,
        reached: state.current_step.index(),
        ready_to_submit,
        standalone_guest_issue: validate_standalone_guest_count(&draft.guests)
            .err()
            .map(|e| e.to_string()),
    })
}

fn load_draft(path: &Path) -> Result<BookingDraft, Box<dyn std::error::Error>> {
    let contents: String = std::fs::read_to_string(path)?;
    let draft: BookingDraft = serde_json::from_str(&contents)?;
    info!(path = %path.display(), dates = draft.dates.len(), "Loaded draft");
    Ok(draft)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Runs a submission until it settles or the user interrupts it.
async fn submit(
    bookings: Arc<dyn BookingService>,
    draft: BookingDraft,
    booking_id: Option<String>,
) -> Result<SubmissionOutcome, ApiError> {
    let mut state: WizardState = match booking_id {
        Some(id) => WizardState::for_edit(id, draft),
        None => WizardState {
            draft,
            ..WizardState::new()
        },
    };
    state.current_step = WizardStep::Confirmation;

    let mut wizard: BookingWizard = BookingWizard::from_state(bookings, state);
    wizard.start_submission()?;

    tokio::select! {
        result = wizard.finish_submission() => result,
        _ = tokio::signal::ctrl_c() => {
            warn!("Interrupted; aborting submission");
            match wizard.close(ClosePolicy::Abort).await {
                (_, CloseOutcome::Settled(result)) => result,
                _ => Err(ApiError::Cancelled),
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match &args.command {
        Command::Check { draft } => {
            let draft: BookingDraft = load_draft(draft)?;
            print_json(&check_draft(&draft)?)?;
        }
        Command::Payload { draft } => {
            let draft: BookingDraft = load_draft(draft)?;
            print_json(&to_payload(&draft))?;
        }
        Command::Addresses => {
            let backend: HttpBackend = HttpBackend::new(args.backend_config())?;
            let addresses: Vec<Address> = addresses_or_empty(&backend).await;
            print_json(&addresses)?;
        }
        Command::Providers => {
            let backend: HttpBackend = HttpBackend::new(args.backend_config())?;
            let providers: Vec<Provider> = backend.list_providers().await?;
            print_json(&providers)?;
        }
        Command::Show { booking_id } => {
            let backend: HttpBackend = HttpBackend::new(args.backend_config())?;
            let booking: Booking = backend.get(booking_id).await?;
            print_json(&hydrate(&booking))?;
        }
        Command::Submit { draft, booking_id } => {
            let draft: BookingDraft = load_draft(draft)?;
            let backend: HttpBackend = HttpBackend::new(args.backend_config())?;
            info!(base_url = %backend.config().base_url, "Submitting draft");

            match submit(Arc::new(backend), draft, booking_id.clone()).await {
                Ok(outcome) => print_json(outcome.booking())?,
                Err(e) => {
                    error!(error = %e, "Submission failed");
                    eprintln!("{}", e.user_message());
                    return Err(e.into());
                }
            }
        }
    }

    Ok(())
}
