//! Weight timeline projections
//!
//! Both directions share the kcal-per-kg constant: a fixed weight delta maps
//! to elapsed days, and elapsed days map back to a weight delta.

/// Energy equivalent of one kilogram of body mass
pub const KCAL_PER_KG: f64 = 7000.0;

const DAYS_PER_WEEK: i64 = 7;

/// Days needed to change weight by `delta_kg` at `rate_kcal` per day
///
/// The sign of the delta is ignored. Rounds half away from zero.
/// Returns `None` for a zero rate.
pub fn days_to_reach(delta_kg: f64, rate_kcal: u32) -> Option<i64> {
    if rate_kcal == 0 {
        return None;
    }
    Some((delta_kg.abs() * KCAL_PER_KG / rate_kcal as f64).round() as i64)
}

/// Weight delta (kg, unsigned) produced over `duration_days` at `rate_kcal` per day
pub fn delta_kg_for_duration(duration_days: i64, rate_kcal: u32) -> f64 {
    (rate_kcal as i64 * duration_days) as f64 / KCAL_PER_KG
}

/// Days of a horizon credited to a projection: completed weeks only
pub fn credited_days(duration_days: i64) -> i64 {
    (duration_days / DAYS_PER_WEEK) * DAYS_PER_WEEK
}

/// Expected weekly change in kg at `rate_kcal` per day, rounded to 2 decimals
pub fn weekly_change_kg(rate_kcal: u32) -> f64 {
    let weekly = delta_kg_for_duration(DAYS_PER_WEEK, rate_kcal);
    (weekly * 100.0).round() / 100.0
}
