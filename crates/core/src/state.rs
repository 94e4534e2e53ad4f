// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chef_booking_domain::{
    BookingDraft, StepRequirement, StepTransition, WizardStep, can_advance, step_blockers,
};
use std::collections::BTreeSet;

/// Whether the session creates a new booking or edits an existing one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionMode {
    /// A fresh booking; submission creates it.
    #[default]
    Create,
    /// An existing booking; submission updates it by id.
    Edit {
        /// The remote booking identifier.
        booking_id: String,
    },
}

impl SessionMode {
    /// Returns the id of the booking being edited, if any.
    #[must_use]
    pub fn booking_id(&self) -> Option<&str> {
        match self {
            Self::Create => None,
            Self::Edit { booking_id } => Some(booking_id),
        }
    }
}

/// The complete state of one wizard session.
///
/// The state is owned by a single caller and threaded explicitly through
/// `apply`; there is no shared wizard store.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WizardState {
    /// The booking being assembled.
    pub draft: BookingDraft,
    /// The step currently shown.
    pub current_step: WizardStep,
    /// Steps advanced past at least once. Display affordance only.
    pub completed: BTreeSet<WizardStep>,
    pub mode: SessionMode,
    /// True while a submission is in flight.
    pub submitting: bool,
}

impl WizardState {
    /// Creates a session for a new booking, positioned on the first step.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session that edits an existing booking.
    ///
    /// # Arguments
    ///
    /// * `booking_id` - The remote booking identifier
    /// * `draft` - The draft hydrated from the remote booking
    #[must_use]
    pub fn for_edit(booking_id: impl Into<String>, draft: BookingDraft) -> Self {
        Self {
            draft,
            mode: SessionMode::Edit {
                booking_id: booking_id.into(),
            },
            ..Self::default()
        }
    }

    /// Returns true if the current step's requirements are met.
    #[must_use]
    pub fn can_advance(&self) -> bool {
        can_advance(self.current_step, &self.draft, self.submitting)
    }

    /// Returns the unmet requirements of the current step.
    #[must_use]
    pub fn current_blockers(&self) -> Vec<StepRequirement> {
        step_blockers(self.current_step, &self.draft, self.submitting)
    }

    /// Returns true if the step has been advanced past at least once.
    #[must_use]
    pub fn is_completed(&self, step: WizardStep) -> bool {
        self.completed.contains(&step)
    }

    /// Returns true if this session edits an existing booking.
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        matches!(self.mode, SessionMode::Edit { .. })
    }
}

/// What a transition did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEvent {
    /// Draft fields were replaced.
    DraftUpdated {
        /// Names of the replaced top-level fields.
        fields: Vec<&'static str>,
    },
    /// A validated forward move.
    Advanced(StepTransition),
    /// The current step is gated; nothing changed.
    AdvanceBlocked {
        step: WizardStep,
        blockers: Vec<StepRequirement>,
    },
    /// A backward move.
    WentBack(StepTransition),
    /// An unvalidated jump.
    Jumped { from: WizardStep, to: WizardStep },
    SubmissionStarted,
    SubmissionSettled { succeeded: bool },
}

/// The result of a successful state transition.
///
/// Transitions are atomic: they either succeed completely or fail without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new state after the transition.
    pub new_state: WizardState,
    /// What happened.
    pub event: WizardEvent,
}
