// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{BookingDraft, Guests, KitchenType, MealPlan, MenuType};
use time::{Date, Month};

pub fn date(year: i32, month: Month, day: u8) -> Date {
    Date::from_calendar_date(year, month, day).unwrap()
}

/// A draft in which every step's requirements are met.
pub fn create_complete_draft() -> BookingDraft {
    let mut draft: BookingDraft = BookingDraft::new();
    draft.event_type = String::from("birthday");
    draft.add_date(date(2025, Month::June, 1));
    draft.menu_type = Some(MenuType::Both);
    draft.toggle_cuisine("italian");
    draft.set_meal_plan(
        date(2025, Month::June, 1),
        MealPlan::new(vec![String::from("dinner")], "19:00"),
    );
    draft.toggle_menu_item("lasagna");
    draft.guests = Guests::new(4, 2, 0);
    draft.toggle_service_provider("chef-42");
    draft.client_materials.kitchen_type = Some(KitchenType::FullyEquipped);
    draft.event_address_id = String::from("addr-1");
    draft
}
