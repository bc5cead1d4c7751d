//! Date range validation
//!
//! Every rule is checked, so the caller gets the full list of problems in
//! one pass instead of fixing them one at a time.

use elite_core::models::{DateValidation, ValidationErrorKind, VehicleId};
use chrono::NaiveDate;

/// Validate a candidate start/end pair against a reference day
///
/// Rules, in order:
/// - missing start → `StartRequired`
/// - missing end → `EndRequired`
/// - start before `today` → `StartInPast`
/// - both present and `end <= start` → `EndNotAfterStart`
pub fn validate_dates(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    today: NaiveDate,
) -> DateValidation {
    let mut validation = DateValidation::default();

    if start.is_none() {
        validation.push(ValidationErrorKind::StartRequired);
    }

    if end.is_none() {
        validation.push(ValidationErrorKind::EndRequired);
    }

    if let Some(start) = start {
        if start < today {
            validation.push(ValidationErrorKind::StartInPast);
        }
    }

    if let (Some(start), Some(end)) = (start, end) {
        if end <= start {
            validation.push(ValidationErrorKind::EndNotAfterStart);
        }
    }

    validation
}

/// Validate a full reservation request
///
/// Runs [`validate_dates`] and additionally requires a non-blank vehicle id.
pub fn validate_request(
    vehicle_id: Option<&VehicleId>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    today: NaiveDate,
) -> DateValidation {
    let mut validation = validate_dates(start, end, today);

    if vehicle_id.map_or(true, VehicleId::is_blank) {
        validation.push(ValidationErrorKind::VehicleRequired);
    }

    validation
}
