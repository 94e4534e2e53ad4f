// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::WizardCommand;
use crate::error::CoreError;
use crate::reducer::merge_update;
use crate::state::{TransitionResult, WizardEvent, WizardState};
use chef_booking_domain::{StepRequirement, StepTransition, WizardStep, validate_step};

/// Applies a command to the wizard state, producing a new state and an event.
///
/// This function is pure: the input state is never modified.
///
/// # Arguments
///
/// * `state` - The current wizard state (immutable)
/// * `command` - The command to apply
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new state and the event
/// * `Err(CoreError)` if the command is not valid in the current state
///
/// # Errors
///
/// Returns an error if:
/// - A submission is started while one is already in flight
/// - A submission is started away from the confirmation step
/// - A submission is started while the confirmation step is incomplete
/// - A submission is settled while none is in flight
///
/// A gated `Advance` is not an error. It leaves the state unchanged and
/// reports `WizardEvent::AdvanceBlocked`.
pub fn apply(state: &WizardState, command: WizardCommand) -> Result<TransitionResult, CoreError> {
    match command {
        WizardCommand::UpdateDraft(update) => {
            let fields: Vec<&'static str> = update.changed_fields();
            let mut new_state: WizardState = state.clone();
            new_state.draft = merge_update(&state.draft, update);

            Ok(TransitionResult {
                new_state,
                event: WizardEvent::DraftUpdated { fields },
            })
        }
        WizardCommand::Advance => Ok(advance(state)),
        WizardCommand::Back => {
            let transition: StepTransition = state
                .current_step
                .previous(state.draft.is_meal_config_skipped);
            let mut new_state: WizardState = state.clone();
            new_state.current_step = transition.to;

            Ok(TransitionResult {
                new_state,
                event: WizardEvent::WentBack(transition),
            })
        }
        WizardCommand::JumpTo(target) => {
            // Direct navigation bypasses validation and does not mark
            // anything complete
            let mut new_state: WizardState = state.clone();
            new_state.current_step = target;

            Ok(TransitionResult {
                new_state,
                event: WizardEvent::Jumped {
                    from: state.current_step,
                    to: target,
                },
            })
        }
        WizardCommand::BeginSubmission => {
            if state.submitting {
                return Err(CoreError::SubmissionInFlight);
            }
            if state.current_step != WizardStep::Confirmation {
                return Err(CoreError::NotOnConfirmationStep(state.current_step));
            }
            validate_step(WizardStep::Confirmation, &state.draft, state.submitting)?;

            let mut new_state: WizardState = state.clone();
            new_state.submitting = true;

            Ok(TransitionResult {
                new_state,
                event: WizardEvent::SubmissionStarted,
            })
        }
        WizardCommand::SettleSubmission { succeeded } => {
            if !state.submitting {
                return Err(CoreError::NoSubmissionInFlight);
            }

            let mut new_state: WizardState = state.clone();
            new_state.submitting = false;
            if succeeded {
                new_state.completed.insert(WizardStep::Confirmation);
            }

            Ok(TransitionResult {
                new_state,
                event: WizardEvent::SubmissionSettled { succeeded },
            })
        }
    }
}

/// Validated forward move along the step graph.
fn advance(state: &WizardState) -> TransitionResult {
    let blockers: Vec<StepRequirement> = state.current_blockers();
    if !blockers.is_empty() {
        return TransitionResult {
            new_state: state.clone(),
            event: WizardEvent::AdvanceBlocked {
                step: state.current_step,
                blockers,
            },
        };
    }

    let transition: StepTransition = state
        .current_step
        .next(state.draft.is_meal_config_skipped);
    let mut new_state: WizardState = state.clone();
    new_state.completed.insert(state.current_step);
    new_state.current_step = transition.to;

    TransitionResult {
        new_state,
        event: WizardEvent::Advanced(transition),
    }
}
