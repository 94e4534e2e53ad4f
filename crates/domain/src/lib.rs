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

mod dates;
mod draft;
mod error;
mod step;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use dates::{EventDates, iso_date_map, parse_iso_date, to_iso_date};
pub use draft::BookingDraft;
pub use error::DomainError;
pub use step::{StepEdge, StepTransition, TOTAL_STEPS, WizardStep};
pub use types::{ClientMaterials, Guests, KitchenType, MealPlan, MenuType, OtherRequirements};
pub use validation::{
    StepRequirement, can_advance, step_blockers, validate_standalone_guest_count, validate_step,
};
