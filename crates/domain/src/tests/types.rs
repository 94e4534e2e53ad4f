// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, Guests, KitchenType, MealPlan, MenuType};
use std::str::FromStr;

#[test]
fn test_menu_type_string_round_trip() {
    for menu_type in [MenuType::Veg, MenuType::NonVeg, MenuType::Both] {
        assert_eq!(MenuType::from_str(menu_type.as_str()).unwrap(), menu_type);
    }
}

#[test]
fn test_invalid_menu_type() {
    assert!(matches!(
        MenuType::from_str("vegan"),
        Err(DomainError::InvalidMenuType(_))
    ));
    assert!(MenuType::from_str("").is_err());
}

#[test]
fn test_kitchen_type_parsing() {
    assert_eq!(KitchenType::from_str("basic").unwrap(), KitchenType::Basic);
    assert_eq!(
        KitchenType::from_str("fully_equipped").unwrap(),
        KitchenType::FullyEquipped
    );
    assert!(matches!(
        KitchenType::from_str("outdoor"),
        Err(DomainError::InvalidKitchenType(_))
    ));
}

#[test]
fn test_wizard_minimum_excludes_babies() {
    assert!(!Guests::new(0, 0, 3).meets_wizard_minimum());
    assert!(Guests::new(1, 0, 0).meets_wizard_minimum());
    assert!(Guests::new(0, 1, 0).meets_wizard_minimum());
}

#[test]
fn test_standalone_minimum_counts_everyone() {
    assert!(!Guests::new(1, 0, 0).meets_standalone_minimum());
    assert!(Guests::new(1, 0, 1).meets_standalone_minimum());
    assert!(Guests::new(0, 0, 2).meets_standalone_minimum());
}

#[test]
fn test_guest_totals_saturate() {
    let guests: Guests = Guests::new(u32::MAX, 5, 5);
    assert_eq!(guests.non_baby_total(), u32::MAX);
    assert_eq!(guests.total(), u32::MAX);
}

#[test]
fn test_meal_plan_has_meals() {
    assert!(!MealPlan::default().has_meals());
    assert!(MealPlan::new(vec![String::from("brunch")], "").has_meals());
}
