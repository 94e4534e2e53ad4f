// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Records owned by the backend and the mapping from a booking back into a draft.

use crate::payload::SubmissionPayload;
use chef_booking_domain::{
    BookingDraft, ClientMaterials, DomainError, EventDates, KitchenType, MenuType, parse_iso_date,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;
use time::Date;
use tracing::warn;

/// A booking as stored by the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Booking {
    /// Backend identifier.
    pub id: String,
    /// Backend-assigned status (e.g. "pending", "confirmed").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(flatten)]
    pub details: SubmissionPayload,
}

/// A saved address from the address directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    pub id: String,
    /// Display label, e.g. "Home".
    pub label: String,
    pub street: String,
    pub city: String,
    pub postal_code: String,
}

/// A chef or catering provider selectable at the service step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Provider {
    pub id: String,
    pub name: String,
    /// Average rating, 0 to 5.
    pub rating: f32,
    /// Base price per booking.
    pub price: f64,
}

/// Builds a booking draft from a remote booking for editing.
///
/// Remote data is trusted to be well-formed. Anything that cannot be read
/// (an invalid date, an unknown menu or kitchen type) is left empty and
/// logged rather than failing the whole hydration.
#[must_use]
pub fn hydrate(booking: &Booking) -> BookingDraft {
    let details: &SubmissionPayload = &booking.details;

    let dates: EventDates = details
        .dates
        .keys()
        .filter_map(|key| parse_or_warn(&booking.id, key))
        .collect();

    let meal_config = details
        .meal_timings
        .iter()
        .filter_map(|(key, plan)| parse_or_warn(&booking.id, key).map(|date| (date, plan.clone())))
        .collect::<BTreeMap<Date, _>>();

    let menu_type: Option<MenuType> = parse_optional(
        &booking.id,
        "food_cuisines_preferences.type",
        &details.food_cuisines_preferences.menu_type,
    );
    let kitchen_type: Option<KitchenType> = parse_optional(
        &booking.id,
        "client_materials.kitchen_type",
        &details.client_materials.kitchen_type,
    );

    BookingDraft {
        event_type: details.event_type.clone(),
        dates,
        menu_type,
        cuisines: details
            .food_cuisines_preferences
            .cuisines
            .iter()
            .cloned()
            .collect(),
        // A booking saved without per-date meals was submitted with meal
        // planning skipped
        is_meal_config_skipped: meal_config.is_empty() && !details.dates.is_empty(),
        meal_config,
        selected_menu: details.menu_items_details.items.iter().cloned().collect(),
        guests: details.guests,
        service_providers: details.services_selections.providers.iter().cloned().collect(),
        event_address_id: details.event_address.clone(),
        client_materials: ClientMaterials {
            provided_materials: details.client_materials.provided_materials.clone(),
            kitchen_type,
            kitchen_appliances: details.client_materials.kitchen_appliances.clone(),
            utensils: details.client_materials.utensils.clone(),
        },
        other_requirements: details.other_requirements.clone(),
    }
}

fn parse_or_warn(booking_id: &str, value: &str) -> Option<Date> {
    match parse_iso_date(value) {
        Ok(date) => Some(date),
        Err(e) => {
            warn!(booking_id, error = %e, "Dropping unreadable date from booking");
            None
        }
    }
}

fn parse_optional<T>(booking_id: &str, field: &str, value: &str) -> Option<T>
where
    T: FromStr<Err = DomainError>,
{
    if value.is_empty() {
        return None;
    }
    match T::from_str(value) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            warn!(booking_id, field, error = %e, "Ignoring unreadable booking field");
            None
        }
    }
}
