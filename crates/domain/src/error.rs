// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::step::WizardStep;
use crate::validation::StepRequirement;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A step index outside `1..=8` was requested.
    InvalidStepIndex(u8),
    /// Failed to parse a calendar date from string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Menu type string is not recognized.
    InvalidMenuType(String),
    /// Kitchen type string is not recognized.
    InvalidKitchenType(String),
    /// A wizard step still has unmet requirements.
    StepIncomplete {
        /// The gated step.
        step: WizardStep,
        /// The requirements that are not satisfied.
        missing: Vec<StepRequirement>,
    },
    /// The standalone people-count page requires more guests.
    InsufficientGuests {
        /// The total number of guests provided.
        total: u32,
        /// The minimum total required.
        minimum: u32,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidStepIndex(index) => {
                write!(f, "Invalid step index: {index}. Must be between 1 and 8")
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::InvalidMenuType(value) => write!(f, "Invalid menu type: '{value}'"),
            Self::InvalidKitchenType(value) => write!(f, "Invalid kitchen type: '{value}'"),
            Self::StepIncomplete { step, missing } => {
                let reasons: Vec<String> = missing.iter().map(ToString::to_string).collect();
                write!(f, "{step} is incomplete: {}", reasons.join("; "))
            }
            Self::InsufficientGuests { total, minimum } => {
                write!(
                    f,
                    "At least {minimum} guests are required, but only {total} were provided"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
