// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The submission adapter.
//!
//! `BookingWizard` owns one wizard session. It threads the state through
//! [`chef_booking::apply`] and runs the backend call on a spawned task so a
//! session that is closed mid-flight can abort it instead of leaving it
//! running unobserved.

use crate::booking::{Address, Booking, hydrate};
use crate::error::{ApiError, ApiResult};
use crate::payload::{SubmissionPayload, to_payload};
use crate::services::{AddressDirectory, BookingService};
use chef_booking::{
    CoreError, DraftUpdate, SessionMode, TransitionResult, WizardCommand, WizardEvent, WizardState,
    apply,
};
use chef_booking_domain::WizardStep;
use std::sync::Arc;
use tokio::task::{JoinError, JoinHandle};
use tracing::{debug, error, info, warn};

/// What a settled submission produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// A new booking was created.
    Created(Booking),
    /// An existing booking was replaced.
    Updated(Booking),
}

impl SubmissionOutcome {
    #[must_use]
    pub const fn booking(&self) -> &Booking {
        match self {
            Self::Created(booking) | Self::Updated(booking) => booking,
        }
    }
}

/// How to close a session that may have a submission in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClosePolicy {
    /// Wait for the in-flight submission to settle.
    AwaitSettlement,
    /// Abort the in-flight submission. A result that already arrived is
    /// still settled.
    Abort,
}

/// What happened when a session was closed.
#[derive(Debug)]
pub enum CloseOutcome {
    /// Nothing was in flight.
    Idle,
    /// The in-flight submission settled before the session closed.
    Settled(ApiResult<SubmissionOutcome>),
    /// The in-flight submission was aborted.
    Aborted,
}

/// Drives one booking wizard session against a booking backend.
pub struct BookingWizard {
    state: WizardState,
    bookings: Arc<dyn BookingService>,
    in_flight: Option<JoinHandle<ApiResult<Booking>>>,
}

impl std::fmt::Debug for BookingWizard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookingWizard")
            .field("state", &self.state)
            .field("in_flight", &self.in_flight.is_some())
            .finish_non_exhaustive()
    }
}

impl BookingWizard {
    /// Starts a session for a new booking.
    #[must_use]
    pub fn new(bookings: Arc<dyn BookingService>) -> Self {
        Self::from_state(bookings, WizardState::new())
    }

    /// Resumes a session from an existing state.
    ///
    /// A state persisted while submitting has no task attached to it, so
    /// the flag is cleared.
    #[must_use]
    pub fn from_state(bookings: Arc<dyn BookingService>, mut state: WizardState) -> Self {
        if state.submitting {
            warn!("Resumed wizard state was mid-submission; clearing the flag");
            state.submitting = false;
        }
        Self {
            state,
            bookings,
            in_flight: None,
        }
    }

    /// Starts a session that edits an existing booking.
    ///
    /// # Errors
    ///
    /// Returns the backend error if the booking cannot be fetched.
    pub async fn edit(bookings: Arc<dyn BookingService>, booking_id: &str) -> ApiResult<Self> {
        let booking: Booking = bookings.get(booking_id).await?;
        info!(booking_id, "Loaded booking for editing");
        let state: WizardState = WizardState::for_edit(booking_id, hydrate(&booking));
        Ok(Self::from_state(bookings, state))
    }

    #[must_use]
    pub const fn state(&self) -> &WizardState {
        &self.state
    }

    #[must_use]
    pub const fn current_step(&self) -> WizardStep {
        self.state.current_step
    }

    #[must_use]
    pub fn can_advance(&self) -> bool {
        self.state.can_advance()
    }

    /// Returns true while a submission is in flight.
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.state.submitting
    }

    fn dispatch(&mut self, command: WizardCommand) -> Result<WizardEvent, CoreError> {
        let TransitionResult { new_state, event } = apply(&self.state, command)?;
        self.state = new_state;
        debug!(?event, step = %self.state.current_step, "Wizard transition");
        Ok(event)
    }

    /// Merges a partial update into the draft.
    ///
    /// # Errors
    ///
    /// Does not currently fail.
    pub fn update(&mut self, update: DraftUpdate) -> Result<WizardEvent, CoreError> {
        self.dispatch(WizardCommand::UpdateDraft(update))
    }

    /// Moves forward if the current step is satisfied.
    ///
    /// # Errors
    ///
    /// Does not currently fail. A gated step reports `WizardEvent::AdvanceBlocked`.
    pub fn advance(&mut self) -> Result<WizardEvent, CoreError> {
        self.dispatch(WizardCommand::Advance)
    }

    /// Moves back one step, honouring the meal-planning skip.
    ///
    /// # Errors
    ///
    /// Does not currently fail.
    pub fn back(&mut self) -> Result<WizardEvent, CoreError> {
        self.dispatch(WizardCommand::Back)
    }

    /// Jumps straight to a step without validation.
    ///
    /// # Errors
    ///
    /// Does not currently fail.
    pub fn jump_to(&mut self, step: WizardStep) -> Result<WizardEvent, CoreError> {
        self.dispatch(WizardCommand::JumpTo(step))
    }

    /// Starts sending the draft to the backend.
    ///
    /// Creates the booking for a new session, updates it for an edit. The
    /// call runs on its own task; collect it with
    /// [`finish_submission`](Self::finish_submission).
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Wizard` without contacting the backend if a
    /// submission is already in flight, the session is not on the final
    /// step, or the final step is incomplete.
    pub fn start_submission(&mut self) -> ApiResult<()> {
        if self.in_flight.is_some() {
            return Err(CoreError::SubmissionInFlight.into());
        }
        self.dispatch(WizardCommand::BeginSubmission)?;

        let payload: SubmissionPayload = to_payload(&self.state.draft);
        let bookings: Arc<dyn BookingService> = Arc::clone(&self.bookings);
        let booking_id: Option<String> = self.state.mode.booking_id().map(str::to_string);

        info!(?booking_id, "Submitting booking");
        self.in_flight = Some(tokio::spawn(async move {
            match booking_id {
                Some(id) => bookings.update(&id, &payload).await,
                None => bookings.create(&payload).await,
            }
        }));
        Ok(())
    }

    /// Waits for the in-flight submission and settles the session.
    ///
    /// On success the final step is marked complete. A created booking
    /// switches the session to editing it, so a repeated submission
    /// updates rather than duplicates. On failure the session stays on
    /// the final step with the draft intact.
    ///
    /// # Errors
    ///
    /// Returns the backend error, `ApiError::Cancelled` if the task was
    /// aborted, or `ApiError::Wizard` if nothing is in flight.
    pub async fn finish_submission(&mut self) -> ApiResult<SubmissionOutcome> {
        let handle: &mut JoinHandle<ApiResult<Booking>> = self
            .in_flight
            .as_mut()
            .ok_or(ApiError::Wizard(CoreError::NoSubmissionInFlight))?;

        // The handle stays in place until the task resolves, so a caller
        // that stops waiting can still abort it through `close` or drop
        let joined: Result<ApiResult<Booking>, JoinError> = handle.await;
        self.in_flight = None;

        self.settle(join_result(joined))
    }

    /// Applies a settled submission result to the session.
    fn settle(&mut self, result: ApiResult<Booking>) -> ApiResult<SubmissionOutcome> {
        self.dispatch(WizardCommand::SettleSubmission {
            succeeded: result.is_ok(),
        })?;

        let booking: Booking = match result {
            Ok(booking) => booking,
            Err(e) => {
                warn!(error = %e, "Booking submission failed");
                return Err(e);
            }
        };

        if let Some(booking_id) = self.state.mode.booking_id() {
            info!(booking_id, "Booking updated");
            return Ok(SubmissionOutcome::Updated(booking));
        }

        info!(booking_id = %booking.id, "Booking created");
        if !booking.id.is_empty() {
            self.state.mode = SessionMode::Edit {
                booking_id: booking.id.clone(),
            };
        }
        Ok(SubmissionOutcome::Created(booking))
    }

    /// Submits and waits for the result.
    ///
    /// # Errors
    ///
    /// See [`start_submission`](Self::start_submission) and
    /// [`finish_submission`](Self::finish_submission).
    pub async fn submit(&mut self) -> ApiResult<SubmissionOutcome> {
        self.start_submission()?;
        self.finish_submission().await
    }

    /// Closes the session, returning the final state.
    ///
    /// With `ClosePolicy::Abort`, a submission that already finished is
    /// still settled and reported as `CloseOutcome::Settled`; only a request
    /// that was actually cut short is reported as `CloseOutcome::Aborted`.
    pub async fn close(mut self, policy: ClosePolicy) -> (WizardState, CloseOutcome) {
        let outcome: CloseOutcome = match (self.in_flight.take(), policy) {
            (None, _) => CloseOutcome::Idle,
            (Some(handle), ClosePolicy::AwaitSettlement) => {
                self.in_flight = Some(handle);
                CloseOutcome::Settled(self.finish_submission().await)
            }
            (Some(handle), ClosePolicy::Abort) => {
                info!("Aborting in-flight submission on close");
                handle.abort();
                match handle.await {
                    Err(join_error) if join_error.is_cancelled() => {
                        if let Err(e) =
                            self.dispatch(WizardCommand::SettleSubmission { succeeded: false })
                        {
                            warn!(error = %e, "Could not settle aborted submission");
                        }
                        CloseOutcome::Aborted
                    }
                    // Finished before the abort landed
                    joined => CloseOutcome::Settled(self.settle(join_result(joined))),
                }
            }
        };
        (self.state.clone(), outcome)
    }
}

fn join_result(joined: Result<ApiResult<Booking>, JoinError>) -> ApiResult<Booking> {
    match joined {
        Ok(result) => result,
        Err(join_error) => {
            if join_error.is_panic() {
                error!(error = %join_error, "Submission task panicked");
            }
            Err(ApiError::Cancelled)
        }
    }
}

impl Drop for BookingWizard {
    fn drop(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            warn!("Wizard dropped with a submission in flight; aborting it");
            handle.abort();
        }
    }
}

/// Lists saved addresses, falling back to none when the directory fails.
///
/// The address step then shows an empty list and stays gated.
pub async fn addresses_or_empty(directory: &dyn AddressDirectory) -> Vec<Address> {
    match directory.list_addresses().await {
        Ok(addresses) => addresses,
        Err(e) => {
            warn!(error = %e, "Could not load saved addresses");
            Vec::new()
        }
    }
}
