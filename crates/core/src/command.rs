// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::reducer::DraftUpdate;
use chef_booking_domain::WizardStep;

/// A command represents caller intent as data only.
///
/// Commands are the only way to request wizard state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardCommand {
    /// Merge a partial update into the draft.
    UpdateDraft(DraftUpdate),
    /// Validated move to the next step.
    Advance,
    /// Move to the previous step. Never validated.
    Back,
    /// Unvalidated move to any step, e.g. from a sidebar while editing.
    JumpTo(WizardStep),
    /// Mark the booking as being submitted.
    BeginSubmission,
    /// Record that the in-flight submission has finished.
    SettleSubmission {
        /// Whether the backend accepted the booking.
        succeeded: bool,
    },
}
