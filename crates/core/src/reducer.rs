// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Partial updates to the booking draft.
//!
//! Updates merge at the top level only. A nested value such as
//! `client_materials` is replaced wholesale, so callers changing one nested
//! field must pass the full nested value.

use chef_booking_domain::{
    BookingDraft, ClientMaterials, EventDates, Guests, MealPlan, MenuType, OtherRequirements,
};
use std::collections::{BTreeMap, BTreeSet};
use time::Date;

/// A partial booking draft. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftUpdate {
    pub event_type: Option<String>,
    pub dates: Option<EventDates>,
    /// `Some(None)` clears the menu type.
    #[allow(clippy::option_option)]
    pub menu_type: Option<Option<MenuType>>,
    pub cuisines: Option<BTreeSet<String>>,
    pub meal_config: Option<BTreeMap<Date, MealPlan>>,
    pub is_meal_config_skipped: Option<bool>,
    pub selected_menu: Option<BTreeSet<String>>,
    pub guests: Option<Guests>,
    pub service_providers: Option<BTreeSet<String>>,
    pub event_address_id: Option<String>,
    pub client_materials: Option<ClientMaterials>,
    pub other_requirements: Option<OtherRequirements>,
}

impl DraftUpdate {
    /// Returns true if the update carries no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.changed_fields().is_empty()
    }

    /// Names of the top-level fields this update replaces.
    #[must_use]
    pub fn changed_fields(&self) -> Vec<&'static str> {
        let candidates: [(&'static str, bool); 12] = [
            ("event_type", self.event_type.is_some()),
            ("dates", self.dates.is_some()),
            ("menu_type", self.menu_type.is_some()),
            ("cuisines", self.cuisines.is_some()),
            ("meal_config", self.meal_config.is_some()),
            ("is_meal_config_skipped", self.is_meal_config_skipped.is_some()),
            ("selected_menu", self.selected_menu.is_some()),
            ("guests", self.guests.is_some()),
            ("service_providers", self.service_providers.is_some()),
            ("event_address_id", self.event_address_id.is_some()),
            ("client_materials", self.client_materials.is_some()),
            ("other_requirements", self.other_requirements.is_some()),
        ];
        candidates
            .into_iter()
            .filter_map(|(name, present)| present.then_some(name))
            .collect()
    }
}

/// Merges `update` into `draft`, returning the new draft.
///
/// No validation happens here; gating is deferred to the step validators.
#[must_use]
pub fn merge_update(draft: &BookingDraft, update: DraftUpdate) -> BookingDraft {
    let mut merged: BookingDraft = draft.clone();

    if let Some(event_type) = update.event_type {
        merged.event_type = event_type;
    }
    if let Some(dates) = update.dates {
        merged.dates = dates;
    }
    if let Some(menu_type) = update.menu_type {
        merged.menu_type = menu_type;
    }
    if let Some(cuisines) = update.cuisines {
        merged.cuisines = cuisines;
    }
    if let Some(meal_config) = update.meal_config {
        merged.meal_config = meal_config;
    }
    if let Some(skipped) = update.is_meal_config_skipped {
        merged.is_meal_config_skipped = skipped;
    }
    if let Some(selected_menu) = update.selected_menu {
        merged.selected_menu = selected_menu;
    }
    if let Some(guests) = update.guests {
        merged.guests = guests;
    }
    if let Some(service_providers) = update.service_providers {
        merged.service_providers = service_providers;
    }
    if let Some(event_address_id) = update.event_address_id {
        merged.event_address_id = event_address_id;
    }
    if let Some(client_materials) = update.client_materials {
        merged.client_materials = client_materials;
    }
    if let Some(other_requirements) = update.other_requirements {
        merged.other_requirements = other_requirements;
    }

    merged
}
