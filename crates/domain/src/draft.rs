// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The in-memory booking draft owned by one wizard session.
//!
//! The draft is a plain record. Field collectors on this type only reshape
//! data (sorted dates, set toggles); they never validate. Gating is the job
//! of the step validators.

use crate::dates::{EventDates, iso_date_map};
use crate::types::{ClientMaterials, Guests, MealPlan, MenuType, OtherRequirements};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use time::Date;

/// The working state of one booking wizard session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingDraft {
    /// Occasion category (e.g. "birthday").
    pub event_type: String,
    /// Event dates, ascending and unique by calendar day.
    pub dates: EventDates,
    pub menu_type: Option<MenuType>,
    pub cuisines: BTreeSet<String>,
    /// Per-date meal selection.
    #[serde(with = "iso_date_map")]
    pub meal_config: BTreeMap<Date, MealPlan>,
    /// When set, per-date meal planning is waived and navigation skips
    /// from meal planning straight to the guest count.
    pub is_meal_config_skipped: bool,
    /// Chosen dish identifiers.
    pub selected_menu: BTreeSet<String>,
    pub guests: Guests,
    pub service_providers: BTreeSet<String>,
    /// Identifier of an address owned by the address directory.
    pub event_address_id: String,
    pub client_materials: ClientMaterials,
    pub other_requirements: OtherRequirements,
}

impl BookingDraft {
    /// Creates an empty draft for a new booking.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an event date. Returns `false` if the day was already selected.
    pub fn add_date(&mut self, date: Date) -> bool {
        self.dates.insert(date)
    }

    /// Removes an event date together with its meal plan.
    pub fn remove_date(&mut self, date: Date) -> bool {
        self.meal_config.remove(&date);
        self.dates.remove(date)
    }

    /// Sets the meal plan for a date.
    pub fn set_meal_plan(&mut self, date: Date, plan: MealPlan) {
        self.meal_config.insert(date, plan);
    }

    /// Returns the meal plan for a date, if one has been entered.
    #[must_use]
    pub fn meal_plan(&self, date: Date) -> Option<&MealPlan> {
        self.meal_config.get(&date)
    }

    /// Dates that do not yet have at least one meal chosen.
    #[must_use]
    pub fn dates_missing_meals(&self) -> Vec<Date> {
        self.dates
            .iter()
            .filter(|date| !self.meal_plan(*date).is_some_and(MealPlan::has_meals))
            .collect()
    }

    pub fn toggle_cuisine(&mut self, cuisine: &str) -> bool {
        toggle(&mut self.cuisines, cuisine)
    }

    pub fn toggle_menu_item(&mut self, item: &str) -> bool {
        toggle(&mut self.selected_menu, item)
    }

    pub fn toggle_service_provider(&mut self, provider_id: &str) -> bool {
        toggle(&mut self.service_providers, provider_id)
    }
}

/// Flips membership of `value` in `set`. Returns whether it is present afterwards.
fn toggle(set: &mut BTreeSet<String>, value: &str) -> bool {
    if set.remove(value) {
        false
    } else {
        set.insert(value.to_string())
    }
}
