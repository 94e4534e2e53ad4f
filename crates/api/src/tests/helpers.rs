// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fake collaborators.

use async_trait::async_trait;
use chef_booking::WizardState;
use chef_booking_domain::{BookingDraft, Guests, KitchenType, MealPlan, MenuType, WizardStep};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use time::{Date, Month};
use tokio::sync::Notify;

use crate::{
    Address, AddressDirectory, ApiError, ApiResult, Booking, BookingService, SubmissionPayload,
};

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

/// A create-mode state with a complete draft on the confirmation step.
pub fn create_ready_state() -> WizardState {
    WizardState {
        draft: create_complete_draft(),
        current_step: WizardStep::Confirmation,
        ..WizardState::new()
    }
}

/// An in-memory booking backend that records every call.
///
/// When gated, `create` and `update` wait for `release` before answering.
#[derive(Default)]
pub struct FakeBookings {
    pub creates: AtomicUsize,
    pub updates: AtomicUsize,
    pub finished: AtomicBool,
    pub last_payload: Mutex<Option<SubmissionPayload>>,
    pub stored: Option<Booking>,
    pub failure: Option<(u16, String)>,
    pub gate: Option<Arc<Notify>>,
}

impl FakeBookings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gated(gate: Arc<Notify>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::default()
        }
    }

    pub fn failing(status: u16, message: &str) -> Self {
        Self {
            failure: Some((status, String::from(message))),
            ..Self::default()
        }
    }

    pub fn with_stored(booking: Booking) -> Self {
        Self {
            stored: Some(booking),
            ..Self::default()
        }
    }

    pub fn create_count(&self) -> usize {
        self.creates.load(Ordering::SeqCst)
    }

    pub fn update_count(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }

    async fn respond(&self, id: &str, payload: &SubmissionPayload) -> ApiResult<Booking> {
        *self.last_payload.lock().unwrap() = Some(payload.clone());
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.finished.store(true, Ordering::SeqCst);

        if let Some((status, message)) = &self.failure {
            return Err(ApiError::Status {
                status: *status,
                message: Some(message.clone()),
                body: format!("{{\"message\":\"{message}\"}}"),
            });
        }
        Ok(Booking {
            id: String::from(id),
            status: Some(String::from("pending")),
            details: payload.clone(),
        })
    }
}

#[async_trait]
impl BookingService for FakeBookings {
    async fn create(&self, payload: &SubmissionPayload) -> ApiResult<Booking> {
        self.creates.fetch_add(1, Ordering::SeqCst);
        self.respond("bk-1", payload).await
    }

    async fn update(&self, id: &str, payload: &SubmissionPayload) -> ApiResult<Booking> {
        self.updates.fetch_add(1, Ordering::SeqCst);
        self.respond(id, payload).await
    }

    async fn get(&self, id: &str) -> ApiResult<Booking> {
        match &self.stored {
            Some(booking) if booking.id == id => Ok(booking.clone()),
            _ => Err(ApiError::Status {
                status: 404,
                message: Some(String::from("Booking not found")),
                body: String::new(),
            }),
        }
    }
}

/// An address directory that is always unavailable.
pub struct UnavailableAddresses;

#[async_trait]
impl AddressDirectory for UnavailableAddresses {
    async fn list_addresses(&self) -> ApiResult<Vec<Address>> {
        Err(ApiError::Status {
            status: 503,
            message: None,
            body: String::from("service unavailable"),
        })
    }
}
