//! Placeholder context construction.
//!
//! Builds the transient placeholder -> value mapping for one generation
//! call. Five keys are always present (`action`, `deliverable`, `event`,
//! `timeframe`, `new_time`); free-text context may override `deliverable`
//! or land under `notes`. The mapping is rebuilt fresh per call and never
//! persisted.

use crate::request::ExcuseRequest;
use chrono::{NaiveDateTime, Timelike};
use std::collections::HashMap;

/// Default value for the `action` placeholder.
pub const DEFAULT_ACTION: &str = "complete the task";

/// Default value for the `deliverable` placeholder.
pub const DEFAULT_DELIVERABLE: &str = "the deliverable";

/// Default value for the `event` placeholder.
pub const DEFAULT_EVENT: &str = "the event";

/// Build the placeholder context for a request at a given wall-clock time.
///
/// The clock is a parameter so callers (and tests) control the
/// time-dependent values; seed-based determinism covers template selection
/// only, never these fields.
///
/// Specificity bands:
///
/// - `>= 7`: `timeframe` is weekday + exact 12-hour time; `new_time` is the
///   same, with minutes floored to the nearest 15-minute mark.
/// - `4..=6`: `timeframe` is the bare weekday name; `new_time` is the
///   weekday plus the hour shifted forward 3 hours (wrapping within the
///   same day), no minutes.
/// - `< 4`: the literals "today" and "tomorrow".
pub fn build_context(request: &ExcuseRequest, now: NaiveDateTime) -> HashMap<String, String> {
    let (timeframe, new_time) = if request.specificity >= 7 {
        let rounded = now
            .with_minute((now.minute() / 15) * 15)
            .unwrap_or(now);
        (
            now.format("%A %I:%M %p").to_string(),
            rounded.format("%A %I:%M %p").to_string(),
        )
    } else if request.specificity >= 4 {
        // Hour arithmetic wraps within the same calendar day; the weekday
        // name does not advance past midnight.
        let shifted = now.with_hour((now.hour() + 3) % 24).unwrap_or(now);
        (
            now.format("%A").to_string(),
            shifted.format("%A %I %p").to_string(),
        )
    } else {
        ("today".to_string(), "tomorrow".to_string())
    };

    let mut context = HashMap::from([
        ("action".to_string(), DEFAULT_ACTION.to_string()),
        ("deliverable".to_string(), DEFAULT_DELIVERABLE.to_string()),
        ("event".to_string(), DEFAULT_EVENT.to_string()),
        ("timeframe".to_string(), timeframe),
        ("new_time".to_string(), new_time),
    ]);

    // Short, comma-free phrases with at least one space read as a concrete
    // deliverable name; anything else is kept as best-effort notes that most
    // templates never consume.
    if let Some(text) = request.custom_context.as_deref()
        && !text.is_empty()
    {
        if text.chars().count() < 120 && !text.contains(',') && text.contains(' ') {
            context.insert("deliverable".to_string(), text.to_string());
        } else {
            context.insert("notes".to_string(), text.to_string());
        }
    }

    context
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    // 2026-08-03 is a Monday.
    fn monday_at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 8, 3)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn request_with_specificity(specificity: u8) -> ExcuseRequest {
        ExcuseRequest {
            specificity,
            ..ExcuseRequest::default()
        }
    }

    #[test]
    fn high_specificity_includes_exact_time() {
        let context = build_context(&request_with_specificity(8), monday_at(14, 47));
        assert_eq!(context["timeframe"], "Monday 02:47 PM");
        assert_eq!(context["new_time"], "Monday 02:45 PM");
    }

    #[test]
    fn high_specificity_rounds_new_time_down_to_quarter_hour() {
        let context = build_context(&request_with_specificity(7), monday_at(9, 14));
        assert_eq!(context["new_time"], "Monday 09:00 AM");

        let context = build_context(&request_with_specificity(10), monday_at(9, 59));
        assert_eq!(context["new_time"], "Monday 09:45 AM");
    }

    #[test]
    fn mid_specificity_uses_bare_weekday_and_shifted_hour() {
        for specificity in [4, 6] {
            let context = build_context(&request_with_specificity(specificity), monday_at(14, 47));
            assert_eq!(context["timeframe"], "Monday");
            assert_eq!(context["new_time"], "Monday 05 PM");
        }
    }

    #[test]
    fn mid_specificity_hour_shift_wraps_within_the_day() {
        let context = build_context(&request_with_specificity(5), monday_at(23, 10));
        // 23 + 3 wraps to 02 AM; still Monday.
        assert_eq!(context["new_time"], "Monday 02 AM");
    }

    #[test]
    fn low_specificity_uses_literals() {
        for specificity in [0, 3] {
            let context = build_context(&request_with_specificity(specificity), monday_at(14, 47));
            assert_eq!(context["timeframe"], "today");
            assert_eq!(context["new_time"], "tomorrow");
        }
    }

    #[test]
    fn defaults_are_always_present() {
        let context = build_context(&request_with_specificity(6), monday_at(8, 0));
        assert_eq!(context["action"], DEFAULT_ACTION);
        assert_eq!(context["deliverable"], DEFAULT_DELIVERABLE);
        assert_eq!(context["event"], DEFAULT_EVENT);
        assert!(!context.contains_key("notes"));
    }

    #[test]
    fn short_custom_context_overrides_deliverable() {
        let request = ExcuseRequest {
            custom_context: Some("client demo".to_string()),
            ..ExcuseRequest::default()
        };
        let context = build_context(&request, monday_at(8, 0));
        assert_eq!(context["deliverable"], "client demo");
        assert!(!context.contains_key("notes"));
    }

    #[test]
    fn long_custom_context_is_kept_as_notes() {
        let request = ExcuseRequest {
            custom_context: Some("x y ".repeat(50)),
            ..ExcuseRequest::default()
        };
        let context = build_context(&request, monday_at(8, 0));
        assert_eq!(context["deliverable"], DEFAULT_DELIVERABLE);
        assert_eq!(context["notes"], "x y ".repeat(50));
    }

    #[test]
    fn comma_in_custom_context_routes_to_notes() {
        let request = ExcuseRequest {
            custom_context: Some("demo, slides".to_string()),
            ..ExcuseRequest::default()
        };
        let context = build_context(&request, monday_at(8, 0));
        assert_eq!(context["deliverable"], DEFAULT_DELIVERABLE);
        assert_eq!(context["notes"], "demo, slides");
    }

    #[test]
    fn spaceless_custom_context_routes_to_notes() {
        let request = ExcuseRequest {
            custom_context: Some("CS101".to_string()),
            ..ExcuseRequest::default()
        };
        let context = build_context(&request, monday_at(8, 0));
        assert_eq!(context["deliverable"], DEFAULT_DELIVERABLE);
        assert_eq!(context["notes"], "CS101");
    }

    #[test]
    fn empty_custom_context_is_ignored() {
        let request = ExcuseRequest {
            custom_context: Some(String::new()),
            ..ExcuseRequest::default()
        };
        let context = build_context(&request, monday_at(8, 0));
        assert_eq!(context["deliverable"], DEFAULT_DELIVERABLE);
        assert!(!context.contains_key("notes"));
    }
}
