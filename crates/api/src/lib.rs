// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod booking;
mod error;
mod http;
mod payload;
mod services;
mod wizard;

#[cfg(test)]
mod tests;

pub use booking::{Address, Booking, Provider, hydrate};
pub use error::{ApiError, ApiResult, GENERIC_ERROR_MESSAGE};
pub use http::{BackendConfig, HttpBackend};
pub use payload::{
    ClientMaterialsPayload, FoodCuisinesPreferences, MenuItemsDetails, ServicesSelections,
    SubmissionPayload, to_payload,
};
pub use services::{AddressDirectory, BookingService, ProviderDirectory};
pub use wizard::{
    BookingWizard, CloseOutcome, ClosePolicy, SubmissionOutcome, addresses_or_empty,
};
