// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chef_booking_domain::{DomainError, WizardStep};

/// Errors that can occur during wizard transitions.
///
/// A gated step is not an error: advancing past it is a no-op that is
/// reported through `WizardEvent::AdvanceBlocked`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// A submission is already in flight for this session.
    SubmissionInFlight,
    /// Submission settled while none was in flight.
    NoSubmissionInFlight,
    /// Submission was requested away from the confirmation step.
    NotOnConfirmationStep(WizardStep),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::SubmissionInFlight => write!(f, "A submission is already in progress"),
            Self::NoSubmissionInFlight => write!(f, "No submission is in progress"),
            Self::NotOnConfirmationStep(step) => {
                write!(f, "Bookings can only be submitted from the final step, not {step}")
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
