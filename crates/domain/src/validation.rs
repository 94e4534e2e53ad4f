// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::dates::to_iso_date;
use crate::draft::BookingDraft;
use crate::error::DomainError;
use crate::step::WizardStep;
use crate::types::Guests;
use serde::{Deserialize, Serialize};
use time::Date;

/// A single requirement that gates a wizard step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "requirement", rename_all = "snake_case")]
pub enum StepRequirement {
    EventType,
    EventDates,
    MenuType,
    Cuisines,
    /// A selected date has no meals chosen.
    MealsForDate {
        date: Date,
    },
    MenuItems,
    /// At least one adult or child.
    NonBabyGuest,
    ServiceProvider,
    KitchenType,
    EventAddress,
    /// The booking is not already being submitted.
    NoSubmissionInFlight,
}

impl std::fmt::Display for StepRequirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EventType => write!(f, "an event type must be selected"),
            Self::EventDates => write!(f, "at least one event date must be selected"),
            Self::MenuType => write!(f, "a menu type must be selected"),
            Self::Cuisines => write!(f, "at least one cuisine must be selected"),
            Self::MealsForDate { date } => {
                write!(f, "no meals selected for {}", to_iso_date(*date))
            }
            Self::MenuItems => write!(f, "at least one menu item must be selected"),
            Self::NonBabyGuest => write!(f, "at least one adult or child is required"),
            Self::ServiceProvider => write!(f, "at least one service provider must be selected"),
            Self::KitchenType => write!(f, "a kitchen type must be selected"),
            Self::EventAddress => write!(f, "an event address must be selected"),
            Self::NoSubmissionInFlight => write!(f, "a submission is already in progress"),
        }
    }
}

/// Lists every requirement of `step` that `draft` does not yet meet.
///
/// Only the step's own fields are inspected; the state of other steps never
/// affects the result. This function is pure and may be called repeatedly
/// while the draft is being edited.
///
/// # Arguments
///
/// * `step` - The step to check
/// * `draft` - The current booking draft
/// * `submitting` - Whether a submission is currently in flight
#[must_use]
pub fn step_blockers(
    step: WizardStep,
    draft: &BookingDraft,
    submitting: bool,
) -> Vec<StepRequirement> {
    let mut missing: Vec<StepRequirement> = Vec::new();

    match step {
        WizardStep::EventDetails => {
            if draft.event_type.is_empty() {
                missing.push(StepRequirement::EventType);
            }
            if draft.dates.is_empty() {
                missing.push(StepRequirement::EventDates);
            }
        }
        WizardStep::CuisinePreferences => {
            if draft.menu_type.is_none() {
                missing.push(StepRequirement::MenuType);
            }
            if draft.cuisines.is_empty() {
                missing.push(StepRequirement::Cuisines);
            }
        }
        WizardStep::MealPlanning => {
            // Skipping waives the per-date requirement entirely
            if !draft.is_meal_config_skipped {
                missing.extend(
                    draft
                        .dates_missing_meals()
                        .into_iter()
                        .map(|date| StepRequirement::MealsForDate { date }),
                );
            }
        }
        WizardStep::MenuSelection => {
            if draft.selected_menu.is_empty() {
                missing.push(StepRequirement::MenuItems);
            }
        }
        WizardStep::GuestCount => {
            if !draft.guests.meets_wizard_minimum() {
                missing.push(StepRequirement::NonBabyGuest);
            }
        }
        WizardStep::ServiceProviders => {
            if draft.service_providers.is_empty() {
                missing.push(StepRequirement::ServiceProvider);
            }
        }
        WizardStep::KitchenMaterials => {
            if draft.client_materials.kitchen_type.is_none() {
                missing.push(StepRequirement::KitchenType);
            }
        }
        WizardStep::Confirmation => {
            if draft.event_address_id.is_empty() {
                missing.push(StepRequirement::EventAddress);
            }
            if submitting {
                missing.push(StepRequirement::NoSubmissionInFlight);
            }
        }
    }

    missing
}

/// Returns true if the wizard may advance past `step`.
///
/// A step is fully gated: every one of its requirements must hold.
#[must_use]
pub fn can_advance(step: WizardStep, draft: &BookingDraft, submitting: bool) -> bool {
    step_blockers(step, draft, submitting).is_empty()
}

/// Validates that `step` is complete.
///
/// # Errors
///
/// Returns `DomainError::StepIncomplete` listing every unmet requirement.
pub fn validate_step(
    step: WizardStep,
    draft: &BookingDraft,
    submitting: bool,
) -> Result<(), DomainError> {
    let missing: Vec<StepRequirement> = step_blockers(step, draft, submitting);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(DomainError::StepIncomplete { step, missing })
    }
}

/// Validates guest counts for the standalone people-count page.
///
/// This page counts every guest, babies included, and needs at least two.
/// The booking wizard applies its own, looser rule at the guest step.
///
/// # Errors
///
/// Returns `DomainError::InsufficientGuests` if fewer than two guests are given.
pub const fn validate_standalone_guest_count(guests: &Guests) -> Result<(), DomainError> {
    if guests.meets_standalone_minimum() {
        Ok(())
    } else {
        Err(DomainError::InsufficientGuests {
            total: guests.total(),
            minimum: Guests::STANDALONE_MINIMUM,
        })
    }
}
