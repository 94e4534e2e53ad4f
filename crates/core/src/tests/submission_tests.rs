// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{apply_ok, create_complete_draft, create_state_at};
use crate::{CoreError, WizardCommand, WizardEvent, WizardState, apply};
use chef_booking_domain::{BookingDraft, DomainError, StepRequirement, WizardStep};

#[test]
fn test_begin_submission_marks_state_submitting() {
    let state: WizardState = create_state_at(WizardStep::Confirmation, create_complete_draft());

    let result = apply_ok(&state, WizardCommand::BeginSubmission);

    assert!(result.new_state.submitting);
    assert_eq!(result.event, WizardEvent::SubmissionStarted);
    assert!(!result.new_state.can_advance());
    assert_eq!(
        result.new_state.current_blockers(),
        vec![StepRequirement::NoSubmissionInFlight]
    );
}

#[test]
fn test_second_submission_is_rejected_while_in_flight() {
    let state: WizardState = create_state_at(WizardStep::Confirmation, create_complete_draft());
    let submitting: WizardState = apply_ok(&state, WizardCommand::BeginSubmission).new_state;

    let result = apply(&submitting, WizardCommand::BeginSubmission);
    assert_eq!(result, Err(CoreError::SubmissionInFlight));
}

#[test]
fn test_submission_requires_confirmation_step() {
    let state: WizardState = create_state_at(WizardStep::KitchenMaterials, create_complete_draft());
    let result = apply(&state, WizardCommand::BeginSubmission);
    assert_eq!(
        result,
        Err(CoreError::NotOnConfirmationStep(WizardStep::KitchenMaterials))
    );
}

#[test]
fn test_submission_requires_event_address() {
    let mut draft: BookingDraft = create_complete_draft();
    draft.event_address_id.clear();
    let state: WizardState = create_state_at(WizardStep::Confirmation, draft);

    let result = apply(&state, WizardCommand::BeginSubmission);
    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(DomainError::StepIncomplete { .. }))
    ));
}

#[test]
fn test_failed_submission_stays_on_confirmation_and_allows_retry() {
    let state: WizardState = create_state_at(WizardStep::Confirmation, create_complete_draft());
    let submitting: WizardState = apply_ok(&state, WizardCommand::BeginSubmission).new_state;

    let settled = apply_ok(&submitting, WizardCommand::SettleSubmission { succeeded: false });

    assert!(!settled.new_state.submitting);
    assert_eq!(settled.new_state.current_step, WizardStep::Confirmation);
    assert!(!settled.new_state.is_completed(WizardStep::Confirmation));
    assert!(apply(&settled.new_state, WizardCommand::BeginSubmission).is_ok());
}

#[test]
fn test_successful_submission_completes_confirmation() {
    let state: WizardState = create_state_at(WizardStep::Confirmation, create_complete_draft());
    let submitting: WizardState = apply_ok(&state, WizardCommand::BeginSubmission).new_state;

    let settled = apply_ok(&submitting, WizardCommand::SettleSubmission { succeeded: true });

    assert!(settled.new_state.is_completed(WizardStep::Confirmation));
    assert_eq!(
        settled.event,
        WizardEvent::SubmissionSettled { succeeded: true }
    );
}

#[test]
fn test_settle_without_submission_is_rejected() {
    let state: WizardState = create_state_at(WizardStep::Confirmation, create_complete_draft());
    assert_eq!(
        apply(&state, WizardCommand::SettleSubmission { succeeded: true }),
        Err(CoreError::NoSubmissionInFlight)
    );
}

#[test]
fn test_edit_session_carries_booking_id() {
    let state: WizardState = WizardState::for_edit("bk-17", create_complete_draft());

    assert!(state.is_editing());
    assert_eq!(state.mode.booking_id(), Some("bk-17"));
    assert_eq!(state.current_step, WizardStep::EventDetails);
    assert!(!WizardState::new().is_editing());
}
