// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{create_complete_draft, date};
use crate::{BookingDraft, KitchenType, MealPlan, MenuType};
use time::Month;

#[test]
fn test_new_draft_is_empty() {
    let draft: BookingDraft = BookingDraft::new();

    assert!(draft.event_type.is_empty());
    assert!(draft.dates.is_empty());
    assert_eq!(draft.menu_type, None);
    assert!(draft.cuisines.is_empty());
    assert!(draft.meal_config.is_empty());
    assert!(!draft.is_meal_config_skipped);
    assert_eq!(draft.guests.total(), 0);
    assert!(draft.event_address_id.is_empty());
    assert_eq!(draft.client_materials.kitchen_type, None);
}

#[test]
fn test_remove_date_drops_its_meal_plan() {
    let mut draft: BookingDraft = BookingDraft::new();
    let day = date(2025, Month::June, 1);
    draft.add_date(day);
    draft.set_meal_plan(day, MealPlan::new(vec![String::from("lunch")], "12:00"));

    assert!(draft.remove_date(day));
    assert!(draft.meal_plan(day).is_none());
    assert!(draft.dates.is_empty());
}

#[test]
fn test_dates_missing_meals_ignores_empty_plans() {
    let mut draft: BookingDraft = BookingDraft::new();
    let first = date(2025, Month::June, 1);
    let second = date(2025, Month::June, 2);
    draft.add_date(first);
    draft.add_date(second);
    draft.set_meal_plan(first, MealPlan::new(vec![String::from("dinner")], "19:00"));
    draft.set_meal_plan(second, MealPlan::new(Vec::new(), "12:00"));

    assert_eq!(draft.dates_missing_meals(), vec![second]);
}

#[test]
fn test_toggles_behave_as_sets() {
    let mut draft: BookingDraft = BookingDraft::new();

    assert!(draft.toggle_cuisine("thai"));
    assert!(draft.toggle_cuisine("indian"));
    assert!(!draft.toggle_cuisine("thai"));
    assert_eq!(draft.cuisines.len(), 1);

    assert!(draft.toggle_menu_item("curry"));
    assert!(draft.toggle_service_provider("chef-1"));
    assert!(!draft.toggle_service_provider("chef-1"));
    assert!(draft.service_providers.is_empty());
}

#[test]
fn test_draft_json_uses_snake_case_and_iso_keys() {
    let draft: BookingDraft = create_complete_draft();
    let value: serde_json::Value = serde_json::to_value(&draft).unwrap();

    assert_eq!(value["event_type"], "birthday");
    assert_eq!(value["dates"][0], "2025-06-01");
    assert_eq!(value["menu_type"], "both");
    assert_eq!(value["meal_config"]["2025-06-01"]["meals"][0], "dinner");
    assert_eq!(
        value["client_materials"]["kitchen_type"],
        "fully_equipped"
    );
}

#[test]
fn test_draft_deserializes_with_missing_fields() {
    let draft: BookingDraft = serde_json::from_str(
        r#"{
            "event_type": "wedding",
            "dates": ["2025-09-20"],
            "menu_type": "veg",
            "meal_config": {"2025-09-20": {"meals": ["lunch"]}},
            "client_materials": {"kitchen_type": "basic"}
        }"#,
    )
    .unwrap();

    assert_eq!(draft.event_type, "wedding");
    assert_eq!(draft.menu_type, Some(MenuType::Veg));
    assert_eq!(
        draft.client_materials.kitchen_type,
        Some(KitchenType::Basic)
    );
    assert_eq!(
        draft.meal_plan(date(2025, Month::September, 20)).unwrap().meals,
        vec![String::from("lunch")]
    );
    assert!(draft.cuisines.is_empty());
    assert_eq!(draft.guests.adults, 0);
}
