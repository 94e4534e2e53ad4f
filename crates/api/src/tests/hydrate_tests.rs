// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chef_booking_domain::{BookingDraft, KitchenType, MenuType};
use serde_json::json;
use time::Month;

use crate::{Booking, hydrate, to_payload};

use super::helpers::{create_complete_draft, date};

fn booking_from(draft: &BookingDraft) -> Booking {
    Booking {
        id: String::from("bk-9"),
        status: Some(String::from("confirmed")),
        details: to_payload(draft),
    }
}

#[test]
fn test_hydrate_restores_submitted_draft() {
    let draft: BookingDraft = create_complete_draft();

    let hydrated: BookingDraft = hydrate(&booking_from(&draft));

    assert_eq!(hydrated, draft);
}

#[test]
fn test_hydrate_infers_skipped_meal_planning() {
    let mut draft: BookingDraft = create_complete_draft();
    draft.meal_config.clear();
    draft.is_meal_config_skipped = true;

    let hydrated: BookingDraft = hydrate(&booking_from(&draft));

    assert!(hydrated.is_meal_config_skipped);
    assert!(hydrated.meal_config.is_empty());
}

#[test]
fn test_hydrate_keeps_skip_when_draft_held_leftover_meals() {
    let mut draft: BookingDraft = create_complete_draft();
    draft.is_meal_config_skipped = true;

    let hydrated: BookingDraft = hydrate(&booking_from(&draft));

    assert!(hydrated.is_meal_config_skipped);
    assert!(hydrated.meal_config.is_empty());
    assert_eq!(hydrated.dates, draft.dates);
}

#[test]
fn test_hydrate_empty_booking_is_not_skipped() {
    let hydrated: BookingDraft = hydrate(&Booking::default());

    assert!(!hydrated.is_meal_config_skipped);
    assert_eq!(hydrated, BookingDraft::new());
}

#[test]
fn test_hydrate_drops_unreadable_values() {
    let booking: Booking = serde_json::from_value(json!({
        "id": "bk-3",
        "event_type": "anniversary",
        "dates": { "2025-07-04": "2025-07-04", "July 5th": "July 5th" },
        "food_cuisines_preferences": { "type": "pescatarian", "cuisines": ["thai"] },
        "client_materials": { "kitchen_type": "basic" }
    }))
    .unwrap();

    let hydrated: BookingDraft = hydrate(&booking);

    assert_eq!(hydrated.event_type, "anniversary");
    assert_eq!(hydrated.dates.len(), 1);
    assert!(hydrated.dates.contains(date(2025, Month::July, 4)));
    assert_eq!(hydrated.menu_type, None);
    assert!(hydrated.cuisines.contains("thai"));
    assert_eq!(
        hydrated.client_materials.kitchen_type,
        Some(KitchenType::Basic)
    );
}

#[test]
fn test_hydrate_reads_menu_type() {
    let mut draft: BookingDraft = create_complete_draft();
    draft.menu_type = Some(MenuType::NonVeg);

    let hydrated: BookingDraft = hydrate(&booking_from(&draft));

    assert_eq!(hydrated.menu_type, Some(MenuType::NonVeg));
}
