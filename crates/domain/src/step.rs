// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Wizard steps and the step graph.
//!
//! The wizard is linear with a single branch. Every move between steps is
//! described by a labeled edge:
//!
//! - `DefaultNext` / `DefaultPrev`: step n to n+1 / n-1
//! - `SkipForward`: meal planning to guest count when meal planning is skipped
//! - `SkipBack`: guest count back to meal planning when meal planning is skipped
//! - `Boundary`: a move past the first or last step, which stays in place
//!
//! The graph is pure. Whether a move is *allowed* is decided by the step
//! validators, not here.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// Number of steps in the booking wizard.
pub const TOTAL_STEPS: u8 = 8;

/// A step of the booking wizard, numbered 1 through 8.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    /// Step 1: occasion and dates.
    #[default]
    EventDetails,
    /// Step 2: menu type and cuisines.
    CuisinePreferences,
    /// Step 3: meals per date.
    MealPlanning,
    /// Step 4: dish selection.
    MenuSelection,
    /// Step 5: guest counts.
    GuestCount,
    /// Step 6: chefs and other providers.
    ServiceProviders,
    /// Step 7: kitchen and materials.
    KitchenMaterials,
    /// Step 8: address and confirmation.
    Confirmation,
}

impl WizardStep {
    /// All steps in order.
    pub const ALL: [Self; TOTAL_STEPS as usize] = [
        Self::EventDetails,
        Self::CuisinePreferences,
        Self::MealPlanning,
        Self::MenuSelection,
        Self::GuestCount,
        Self::ServiceProviders,
        Self::KitchenMaterials,
        Self::Confirmation,
    ];

    pub const FIRST: Self = Self::EventDetails;
    pub const LAST: Self = Self::Confirmation;

    /// Returns the 1-based step number.
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::EventDetails => 1,
            Self::CuisinePreferences => 2,
            Self::MealPlanning => 3,
            Self::MenuSelection => 4,
            Self::GuestCount => 5,
            Self::ServiceProviders => 6,
            Self::KitchenMaterials => 7,
            Self::Confirmation => 8,
        }
    }

    /// Looks up a step by its 1-based number.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStepIndex` if `index` is not in `1..=8`.
    pub const fn from_index(index: u8) -> Result<Self, DomainError> {
        match index {
            1 => Ok(Self::EventDetails),
            2 => Ok(Self::CuisinePreferences),
            3 => Ok(Self::MealPlanning),
            4 => Ok(Self::MenuSelection),
            5 => Ok(Self::GuestCount),
            6 => Ok(Self::ServiceProviders),
            7 => Ok(Self::KitchenMaterials),
            8 => Ok(Self::Confirmation),
            _ => Err(DomainError::InvalidStepIndex(index)),
        }
    }

    /// Human-readable step title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::EventDetails => "Event details",
            Self::CuisinePreferences => "Cuisine preferences",
            Self::MealPlanning => "Meal planning",
            Self::MenuSelection => "Menu selection",
            Self::GuestCount => "Guest count",
            Self::ServiceProviders => "Service providers",
            Self::KitchenMaterials => "Kitchen and materials",
            Self::Confirmation => "Address and confirmation",
        }
    }

    /// Returns true if the skip branch routes around this step.
    #[must_use]
    pub const fn is_bypassed(self, meal_config_skipped: bool) -> bool {
        meal_config_skipped && matches!(self, Self::MenuSelection)
    }

    /// The step reached by moving forward from this one.
    #[must_use]
    pub const fn next(self, meal_config_skipped: bool) -> StepTransition {
        let (to, edge) = match self {
            Self::MealPlanning if meal_config_skipped => (Self::GuestCount, StepEdge::SkipForward),
            Self::Confirmation => (Self::Confirmation, StepEdge::Boundary),
            Self::EventDetails => (Self::CuisinePreferences, StepEdge::DefaultNext),
            Self::CuisinePreferences => (Self::MealPlanning, StepEdge::DefaultNext),
            Self::MealPlanning => (Self::MenuSelection, StepEdge::DefaultNext),
            Self::MenuSelection => (Self::GuestCount, StepEdge::DefaultNext),
            Self::GuestCount => (Self::ServiceProviders, StepEdge::DefaultNext),
            Self::ServiceProviders => (Self::KitchenMaterials, StepEdge::DefaultNext),
            Self::KitchenMaterials => (Self::Confirmation, StepEdge::DefaultNext),
        };
        StepTransition {
            from: self,
            to,
            edge,
        }
    }

    /// The step reached by moving back from this one.
    #[must_use]
    pub const fn previous(self, meal_config_skipped: bool) -> StepTransition {
        let (to, edge) = match self {
            Self::GuestCount if meal_config_skipped => (Self::MealPlanning, StepEdge::SkipBack),
            Self::EventDetails => (Self::EventDetails, StepEdge::Boundary),
            Self::CuisinePreferences => (Self::EventDetails, StepEdge::DefaultPrev),
            Self::MealPlanning => (Self::CuisinePreferences, StepEdge::DefaultPrev),
            Self::MenuSelection => (Self::MealPlanning, StepEdge::DefaultPrev),
            Self::GuestCount => (Self::MenuSelection, StepEdge::DefaultPrev),
            Self::ServiceProviders => (Self::GuestCount, StepEdge::DefaultPrev),
            Self::KitchenMaterials => (Self::ServiceProviders, StepEdge::DefaultPrev),
            Self::Confirmation => (Self::KitchenMaterials, StepEdge::DefaultPrev),
        };
        StepTransition {
            from: self,
            to,
            edge,
        }
    }
}

impl TryFrom<u8> for WizardStep {
    type Error = DomainError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::from_index(index)
    }
}

impl From<WizardStep> for u8 {
    fn from(step: WizardStep) -> Self {
        step.index()
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Step {} ({})", self.index(), self.title())
    }
}

/// The label on an edge of the step graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepEdge {
    DefaultNext,
    DefaultPrev,
    SkipForward,
    SkipBack,
    /// Clamped at the first or last step.
    Boundary,
}

/// A move through the step graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StepTransition {
    pub from: WizardStep,
    pub to: WizardStep,
    pub edge: StepEdge,
}

impl StepTransition {
    /// Returns true if the move leaves the current step.
    #[must_use]
    pub const fn moves(&self) -> bool {
        !matches!(self.edge, StepEdge::Boundary)
    }
}
