// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The wire format sent to the booking backend.
//!
//! Every key is snake_case. Dates are ISO `YYYY-MM-DD` strings. The
//! `dates` object maps each date to itself; the backend expects both key
//! and value, so the redundancy is kept.

use chef_booking_domain::{BookingDraft, Guests, MealPlan, OtherRequirements, to_iso_date};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Menu type and cuisines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FoodCuisinesPreferences {
    /// `veg`, `non_veg`, `both`, or empty.
    #[serde(rename = "type")]
    pub menu_type: String,
    pub cuisines: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuItemsDetails {
    pub items: Vec<String>,
}

/// Client materials with the kitchen type flattened to its wire string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientMaterialsPayload {
    pub provided_materials: Vec<String>,
    /// `basic`, `fully_equipped`, or empty.
    pub kitchen_type: String,
    pub kitchen_appliances: Vec<String>,
    pub utensils: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServicesSelections {
    pub providers: Vec<String>,
}

/// The booking body for create and update requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmissionPayload {
    pub event_type: String,
    /// Address identifier.
    pub event_address: String,
    /// ISO date to the same ISO date.
    pub dates: BTreeMap<String, String>,
    pub food_cuisines_preferences: FoodCuisinesPreferences,
    /// ISO date to the meals planned for it. Empty when meal planning was
    /// skipped.
    pub meal_timings: BTreeMap<String, MealPlan>,
    pub menu_items_details: MenuItemsDetails,
    pub guests: Guests,
    pub client_materials: ClientMaterialsPayload,
    pub services_selections: ServicesSelections,
    pub other_requirements: OtherRequirements,
}

/// Maps a booking draft to the backend's payload shape.
#[must_use]
pub fn to_payload(draft: &BookingDraft) -> SubmissionPayload {
    let dates: BTreeMap<String, String> = draft
        .dates
        .iter()
        .map(|date| {
            let iso: String = to_iso_date(date);
            (iso.clone(), iso)
        })
        .collect();

    // A skipped meal-planning step sends no timings, whatever is still held
    let meal_timings: BTreeMap<String, MealPlan> = if draft.is_meal_config_skipped {
        BTreeMap::new()
    } else {
        draft
            .meal_config
            .iter()
            .map(|(date, plan)| (to_iso_date(*date), plan.clone()))
            .collect()
    };

    SubmissionPayload {
        event_type: draft.event_type.clone(),
        event_address: draft.event_address_id.clone(),
        dates,
        food_cuisines_preferences: FoodCuisinesPreferences {
            menu_type: draft
                .menu_type
                .map(|menu_type| menu_type.as_str().to_string())
                .unwrap_or_default(),
            cuisines: draft.cuisines.iter().cloned().collect(),
        },
        meal_timings,
        menu_items_details: MenuItemsDetails {
            items: draft.selected_menu.iter().cloned().collect(),
        },
        guests: draft.guests,
        client_materials: ClientMaterialsPayload {
            provided_materials: draft.client_materials.provided_materials.clone(),
            kitchen_type: draft
                .client_materials
                .kitchen_type
                .map(|kitchen_type| kitchen_type.as_str().to_string())
                .unwrap_or_default(),
            kitchen_appliances: draft.client_materials.kitchen_appliances.clone(),
            utensils: draft.client_materials.utensils.clone(),
        },
        services_selections: ServicesSelections {
            providers: draft.service_providers.iter().cloned().collect(),
        },
        other_requirements: draft.other_requirements.clone(),
    }
}
