// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The menu style requested for the event.
///
/// The choices are mutually exclusive. An unset menu type is modelled as
/// `Option::None` on the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuType {
    /// Vegetarian dishes only.
    Veg,
    /// Non-vegetarian dishes only.
    NonVeg,
    /// A mix of vegetarian and non-vegetarian dishes.
    Both,
}

impl MenuType {
    /// Returns the wire representation of the menu type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Veg => "veg",
            Self::NonVeg => "non_veg",
            Self::Both => "both",
        }
    }
}

impl FromStr for MenuType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "veg" => Ok(Self::Veg),
            "non_veg" => Ok(Self::NonVeg),
            "both" => Ok(Self::Both),
            _ => Err(DomainError::InvalidMenuType(s.to_string())),
        }
    }
}

impl std::fmt::Display for MenuType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The kind of kitchen available at the event venue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KitchenType {
    /// A basic kitchen; the chef brings most equipment.
    Basic,
    /// A fully equipped kitchen.
    FullyEquipped,
}

impl KitchenType {
    /// Returns the wire representation of the kitchen type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::FullyEquipped => "fully_equipped",
        }
    }
}

impl FromStr for KitchenType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(Self::Basic),
            "fully_equipped" => Ok(Self::FullyEquipped),
            _ => Err(DomainError::InvalidKitchenType(s.to_string())),
        }
    }
}

impl std::fmt::Display for KitchenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Guest counts by age group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Guests {
    pub adults: u32,
    pub children: u32,
    pub babies: u32,
}

impl Guests {
    /// The minimum number of non-baby guests for the booking wizard.
    pub const WIZARD_MINIMUM: u32 = 1;
    /// The minimum number of guests (all age groups) on the standalone people-count page.
    pub const STANDALONE_MINIMUM: u32 = 2;

    #[must_use]
    pub const fn new(adults: u32, children: u32, babies: u32) -> Self {
        Self {
            adults,
            children,
            babies,
        }
    }

    /// Adults plus children. Babies do not count towards catering.
    #[must_use]
    pub const fn non_baby_total(&self) -> u32 {
        self.adults.saturating_add(self.children)
    }

    /// Every guest, babies included.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.non_baby_total().saturating_add(self.babies)
    }

    /// The rule the booking wizard applies at the guest step.
    #[must_use]
    pub const fn meets_wizard_minimum(&self) -> bool {
        self.non_baby_total() >= Self::WIZARD_MINIMUM
    }

    /// The rule the standalone people-count page applies.
    #[must_use]
    pub const fn meets_standalone_minimum(&self) -> bool {
        self.total() >= Self::STANDALONE_MINIMUM
    }
}

/// Meals requested for a single event date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct MealPlan {
    /// Meal identifiers (e.g. "breakfast", "dinner").
    pub meals: Vec<String>,
    /// Requested serving time, free-form.
    pub time: String,
}

impl MealPlan {
    #[must_use]
    pub fn new(meals: Vec<String>, time: impl Into<String>) -> Self {
        Self {
            meals,
            time: time.into(),
        }
    }

    /// A plan counts only once at least one meal is chosen.
    #[must_use]
    pub fn has_meals(&self) -> bool {
        !self.meals.is_empty()
    }
}

/// What the client supplies at the venue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientMaterials {
    pub provided_materials: Vec<String>,
    pub kitchen_type: Option<KitchenType>,
    pub kitchen_appliances: Vec<String>,
    pub utensils: Vec<String>,
}

/// Optional extras attached to the booking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct OtherRequirements {
    pub additional_services: Vec<String>,
    pub ambience: Vec<String>,
    pub transportation: Vec<String>,
    pub special_requests: Vec<String>,
    pub dietary_restrictions: Vec<String>,
    pub entertainment: Vec<String>,
}
