use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Weekday};

use crate::models::pricing::TimeBasedRule;

/// Day-of-week and time-of-day matching for time-based pricing rules.
///
/// Rules are stored with lowercase day names and "HH:MM" bounds. A window
/// whose start is later than its end wraps past midnight, so 22:00-06:00
/// covers late evening and early morning pickups.
pub struct TimeRuleService;

impl TimeRuleService {
    /// Resolve the pickup instant from the request fields. Prefers the
    /// pickup_date/pickup_time pair; falls back to the combined date_time
    /// string. Returns None when nothing parseable was supplied, which
    /// downstream means "no time-based adjustment".
    pub fn pickup_instant(
        pickup_date: Option<&str>,
        pickup_time: Option<&str>,
        date_time: Option<&str>,
    ) -> Option<NaiveDateTime> {
        if let (Some(date), Some(time)) = (pickup_date, pickup_time) {
            let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok()?;
            let time = Self::parse_time(time)?;
            return Some(date.and_time(time));
        }

        let raw = date_time?.trim();
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
            .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
            .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M"))
            .ok()
    }

    fn parse_time(raw: &str) -> Option<NaiveTime> {
        let raw = raw.trim();
        NaiveTime::parse_from_str(raw, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
            .ok()
    }

    pub fn day_name(weekday: Weekday) -> &'static str {
        match weekday {
            Weekday::Sun => "sunday",
            Weekday::Mon => "monday",
            Weekday::Tue => "tuesday",
            Weekday::Wed => "wednesday",
            Weekday::Thu => "thursday",
            Weekday::Fri => "friday",
            Weekday::Sat => "saturday",
        }
    }

    /// Minutes since midnight for an "HH:MM" rule bound.
    fn minutes_from_hhmm(raw: &str) -> Option<u32> {
        let time = Self::parse_time(raw)?;
        Some(time.hour() * 60 + time.minute())
    }

    /// Inclusive on both ends; wraps midnight when start > end.
    fn window_contains(start_minutes: u32, end_minutes: u32, pickup_minutes: u32) -> bool {
        if start_minutes <= end_minutes {
            pickup_minutes >= start_minutes && pickup_minutes <= end_minutes
        } else {
            pickup_minutes >= start_minutes || pickup_minutes <= end_minutes
        }
    }

    fn rule_matches(
        rule: &TimeBasedRule,
        day: &str,
        pickup_minutes: u32,
        vehicle_category: Option<&str>,
        service_type_id: &str,
    ) -> bool {
        if let Some(rule_category) = &rule.category_id {
            if vehicle_category != Some(rule_category.as_str()) {
                return false;
            }
        }

        if let Some(rule_service_type) = &rule.service_type_id {
            if rule_service_type != service_type_id {
                return false;
            }
        }

        if !rule.days_of_week.is_empty() && !rule.days_of_week.iter().any(|d| d == day) {
            return false;
        }

        // A rule constrains by time only when both bounds are present.
        // Bounds that fail to parse never match.
        if let (Some(start), Some(end)) = (&rule.start_time, &rule.end_time) {
            match (
                Self::minutes_from_hhmm(start),
                Self::minutes_from_hhmm(end),
            ) {
                (Some(start_minutes), Some(end_minutes)) => {
                    return Self::window_contains(start_minutes, end_minutes, pickup_minutes);
                }
                _ => return false,
            }
        }

        true
    }

    /// Pick the single applicable rule for a pickup instant: highest priority
    /// wins, ties broken by rule id so selection is reproducible.
    pub fn select_rule<'a>(
        rules: &'a [TimeBasedRule],
        pickup: NaiveDateTime,
        vehicle_category: Option<&str>,
        service_type_id: &str,
    ) -> Option<&'a TimeBasedRule> {
        let day = Self::day_name(pickup.date().weekday());
        let pickup_minutes = pickup.time().hour() * 60 + pickup.time().minute();

        let mut candidates: Vec<&TimeBasedRule> = rules.iter().filter(|r| r.is_active).collect();
        candidates.sort_by(|a, b| b.priority.cmp(&a.priority).then(a.id.cmp(&b.id)));

        candidates
            .into_iter()
            .find(|rule| Self::rule_matches(rule, day, pickup_minutes, vehicle_category, service_type_id))
    }

    /// Signed adjustment amount; negative percentages discount the base.
    pub fn adjustment(base_amount: f64, rule: &TimeBasedRule) -> f64 {
        base_amount * (rule.adjustment_percentage / 100.0)
    }
}
