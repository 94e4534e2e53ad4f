// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{TransitionResult, WizardCommand, WizardState, apply};
use chef_booking_domain::{BookingDraft, Guests, KitchenType, MealPlan, MenuType, WizardStep};
use time::{Date, Month};

pub fn date(year: i32, month: Month, day: u8) -> Date {
    Date::from_calendar_date(year, month, day).unwrap()
}

/// A draft in which every step's requirements are met.
pub fn create_complete_draft() -> BookingDraft {
    let mut draft: BookingDraft = BookingDraft::new();
    draft.event_type = String::from("birthday");
    draft.add_date(date(2025, Month::June, 1));
    draft.menu_type = Some(MenuType::NonVeg);
    draft.toggle_cuisine("japanese");
    draft.set_meal_plan(
        date(2025, Month::June, 1),
        MealPlan::new(vec![String::from("dinner")], "20:00"),
    );
    draft.toggle_menu_item("ramen");
    draft.guests = Guests::new(6, 0, 1);
    draft.toggle_service_provider("chef-7");
    draft.client_materials.kitchen_type = Some(KitchenType::Basic);
    draft.event_address_id = String::from("addr-3");
    draft
}

/// A state with a complete draft, positioned on `step`.
pub fn create_state_at(step: WizardStep, draft: BookingDraft) -> WizardState {
    WizardState {
        draft,
        current_step: step,
        ..WizardState::new()
    }
}

/// Applies a command that must succeed.
pub fn apply_ok(state: &WizardState, command: WizardCommand) -> TransitionResult {
    apply(state, command).unwrap()
}
