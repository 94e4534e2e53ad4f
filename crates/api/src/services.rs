// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Contracts of the external collaborators the wizard talks to.
//!
//! The wizard never owns bookings, addresses or providers. It reads them
//! through these traits and sends bookings through `BookingService`.

use crate::booking::{Address, Booking, Provider};
use crate::error::ApiResult;
use crate::payload::SubmissionPayload;
use async_trait::async_trait;

/// Creates, updates and fetches bookings.
#[async_trait]
pub trait BookingService: Send + Sync {
    /// Creates a new booking.
    ///
    /// # Errors
    ///
    /// Returns the transport or backend error unchanged.
    async fn create(&self, payload: &SubmissionPayload) -> ApiResult<Booking>;

    /// Replaces an existing booking.
    ///
    /// # Errors
    ///
    /// Returns the transport or backend error unchanged.
    async fn update(&self, id: &str, payload: &SubmissionPayload) -> ApiResult<Booking>;

    /// Fetches a booking for editing.
    ///
    /// # Errors
    ///
    /// Returns the transport or backend error unchanged.
    async fn get(&self, id: &str) -> ApiResult<Booking>;
}

/// Lists the caller's saved addresses.
#[async_trait]
pub trait AddressDirectory: Send + Sync {
    /// # Errors
    ///
    /// Returns the transport or backend error unchanged.
    async fn list_addresses(&self) -> ApiResult<Vec<Address>>;
}

/// Lists selectable service providers. Read-only.
#[async_trait]
pub trait ProviderDirectory: Send + Sync {
    /// # Errors
    ///
    /// Returns the transport or backend error unchanged.
    async fn list_providers(&self) -> ApiResult<Vec<Provider>>;
}
