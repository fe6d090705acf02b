// ABOUTME: Health metric calculators: BMI, Mifflin-St Jeor BMR, estimated daily intake
// ABOUTME: Missing or invalid inputs degrade to None; these functions never error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrikit Project

//! Health metric calculations.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting
//!   energy expenditure. *American Journal of Clinical Nutrition*, 51(2),
//!   241-247. <https://doi.org/10.1093/ajcn.51.2.241>
//! - McArdle et al. (2010), *Exercise Physiology* — activity multipliers
//!   used for the estimated daily intake (TDEE).
//!
//! Absence of a usable input is a `None` result, not an error: a summary
//! stays usable even when the profile lacks body metrics, its percentage
//! fields simply stay unset.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::constants::ActivityLevel;
use crate::models::UserProfile;
use crate::rounding::{half_up, round2};

/// Body Mass Index: weight / height².
///
/// Height is converted from centimeters to meters at 8-decimal precision;
/// the quotient is taken at 6 decimals and the result rounded to 2, all
/// half-up. Returns `None` when either input is absent or non-positive.
#[must_use]
pub fn bmi(weight_kg: Option<Decimal>, height_cm: Option<Decimal>) -> Option<Decimal> {
    let weight = weight_kg?;
    let height = height_cm?;
    if weight <= Decimal::ZERO || height <= Decimal::ZERO {
        return None;
    }
    let height_m = half_up(height / dec!(100), 8);
    if height_m.is_zero() {
        return None;
    }
    let quotient = half_up(weight / (height_m * height_m), 6);
    Some(round2(quotient))
}

/// Basal Metabolic Rate, Mifflin-St Jeor (1990).
///
/// `10·w + 6.25·h − 5·age + 5` for male, `− 161` for female; gender is
/// matched case-insensitively against `male`/`m` and `female`/`f`, anything
/// else yields `None`. Age is whole years between `date_of_birth` and
/// `as_of`; a negative age yields `None`. Result rounded to 2 decimals,
/// half-up.
#[must_use]
pub fn bmr_mifflin_st_jeor(
    gender: Option<&str>,
    date_of_birth: Option<NaiveDate>,
    weight_kg: Option<Decimal>,
    height_cm: Option<Decimal>,
    as_of: NaiveDate,
) -> Option<Decimal> {
    let dob = date_of_birth?;
    let weight = weight_kg?;
    let height = height_cm?;
    let age = whole_years_between(dob, as_of);
    if age < 0 {
        return None;
    }

    let base = dec!(10) * weight + dec!(6.25) * height - dec!(5) * Decimal::from(age);
    let bmr = match gender {
        Some(g) if g.eq_ignore_ascii_case("male") || g.eq_ignore_ascii_case("m") => {
            base + dec!(5)
        }
        Some(g) if g.eq_ignore_ascii_case("female") || g.eq_ignore_ascii_case("f") => {
            base - dec!(161)
        }
        _ => return None,
    };
    Some(round2(bmr))
}

/// Estimated daily intake (TDEE): BMR × activity multiplier.
///
/// Uses the lenient [`ActivityLevel::parse_or_default`] policy — an
/// unparseable activity string silently falls back to sedentary rather than
/// failing the calling summary. Returns `None` only when `bmr` is `None`.
#[must_use]
pub fn estimated_daily_intake(
    bmr: Option<Decimal>,
    activity_level: Option<&str>,
) -> Option<Decimal> {
    let bmr = bmr?;
    let level = ActivityLevel::parse_or_default(activity_level);
    Some(round2(bmr * level.multiplier()))
}

/// Health metrics derived from a profile, rendered alongside it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthSnapshot {
    /// Body Mass Index
    pub bmi: Option<Decimal>,
    /// Basal Metabolic Rate in kcal/day
    pub bmr_kcal: Option<Decimal>,
    /// Estimated daily intake (TDEE) in kcal/day
    pub estimated_daily_intake_kcal: Option<Decimal>,
}

/// Compute the derived health metrics for a profile as of a given date.
///
/// Each field is independently `None` when its inputs are missing; a profile
/// with only weight and height still gets a BMI.
#[must_use]
pub fn health_snapshot(profile: &UserProfile, as_of: NaiveDate) -> HealthSnapshot {
    let bmi = bmi(profile.current_weight_kg, profile.height_cm);
    let bmr = bmr_mifflin_st_jeor(
        profile.gender.as_deref(),
        profile.date_of_birth,
        profile.current_weight_kg,
        profile.height_cm,
        as_of,
    );
    let intake = estimated_daily_intake(bmr, Some(profile.activity_level.as_str()));
    HealthSnapshot {
        bmi,
        bmr_kcal: bmr,
        estimated_daily_intake_kcal: intake,
    }
}

/// Whole years between two dates, truncated toward zero (the years component
/// of a calendar period). A `from` date less than a year in the future still
/// counts as zero.
fn whole_years_between(from: NaiveDate, to: NaiveDate) -> i32 {
    let mut years = to.year() - from.year();
    if to >= from {
        if (to.month(), to.day()) < (from.month(), from.day()) {
            years -= 1;
        }
    } else if (to.month(), to.day()) > (from.month(), from.day()) {
        years += 1;
    }
    years
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn bmi_returns_expected_value() {
        // 70 / (1.75^2) = 22.857... => 22.86
        let result = bmi(Some(dec!(70)), Some(dec!(175)));
        assert_eq!(result.map(|v| v.to_string()).as_deref(), Some("22.86"));
    }

    #[test]
    fn bmi_missing_or_non_positive_inputs_yield_none() {
        assert_eq!(bmi(None, Some(dec!(175))), None);
        assert_eq!(bmi(Some(dec!(70)), None), None);
        assert_eq!(bmi(Some(dec!(0)), Some(dec!(175))), None);
        assert_eq!(bmi(Some(dec!(70)), Some(dec!(0))), None);
        assert_eq!(bmi(Some(dec!(-70)), Some(dec!(175))), None);
    }

    #[test]
    fn bmr_mifflin_st_jeor_male() {
        // 10*70 + 6.25*175 - 5*30 + 5 = 1648.75
        let result = bmr_mifflin_st_jeor(
            Some("male"),
            Some(date(1995, 6, 15)),
            Some(dec!(70)),
            Some(dec!(175)),
            date(2025, 6, 15),
        );
        assert_eq!(result.map(|v| v.to_string()).as_deref(), Some("1648.75"));
    }

    #[test]
    fn bmr_mifflin_st_jeor_female() {
        // 10*60 + 6.25*165 - 5*25 - 161 = 1345.25
        let result = bmr_mifflin_st_jeor(
            Some("female"),
            Some(date(2000, 3, 1)),
            Some(dec!(60)),
            Some(dec!(165)),
            date(2025, 3, 1),
        );
        assert_eq!(result.map(|v| v.to_string()).as_deref(), Some("1345.25"));
    }

    #[test]
    fn bmr_gender_matching_is_case_insensitive_and_accepts_short_forms() {
        let dob = Some(date(1995, 6, 15));
        let as_of = date(2025, 6, 15);
        let long = bmr_mifflin_st_jeor(Some("MALE"), dob, Some(dec!(70)), Some(dec!(175)), as_of);
        let short = bmr_mifflin_st_jeor(Some("m"), dob, Some(dec!(70)), Some(dec!(175)), as_of);
        assert_eq!(long, short);
        assert!(long.is_some());
    }

    #[test]
    fn bmr_unknown_gender_yields_none() {
        let result = bmr_mifflin_st_jeor(
            Some("other"),
            Some(date(1995, 6, 15)),
            Some(dec!(70)),
            Some(dec!(175)),
            date(2025, 6, 15),
        );
        assert_eq!(result, None);
        let absent = bmr_mifflin_st_jeor(
            None,
            Some(date(1995, 6, 15)),
            Some(dec!(70)),
            Some(dec!(175)),
            date(2025, 6, 15),
        );
        assert_eq!(absent, None);
    }

    #[test]
    fn bmr_missing_inputs_yield_none() {
        let as_of = date(2025, 6, 15);
        assert_eq!(
            bmr_mifflin_st_jeor(Some("male"), None, Some(dec!(70)), Some(dec!(175)), as_of),
            None
        );
        assert_eq!(
            bmr_mifflin_st_jeor(
                Some("male"),
                Some(date(1995, 6, 15)),
                None,
                Some(dec!(175)),
                as_of
            ),
            None
        );
        assert_eq!(
            bmr_mifflin_st_jeor(
                Some("male"),
                Some(date(1995, 6, 15)),
                Some(dec!(70)),
                None,
                as_of
            ),
            None
        );
    }

    #[test]
    fn bmr_negative_age_yields_none() {
        let result = bmr_mifflin_st_jeor(
            Some("male"),
            Some(date(2030, 1, 1)),
            Some(dec!(70)),
            Some(dec!(175)),
            date(2025, 6, 15),
        );
        assert_eq!(result, None);
    }

    #[test]
    fn estimated_daily_intake_uses_activity_multiplier() {
        let result = estimated_daily_intake(Some(dec!(1600)), Some("Moderately active"));
        assert_eq!(result.map(|v| v.to_string()).as_deref(), Some("2480.00"));
    }

    #[test]
    fn estimated_daily_intake_falls_back_to_sedentary() {
        let result = estimated_daily_intake(Some(dec!(1600)), Some("couch potato"));
        assert_eq!(result.map(|v| v.to_string()).as_deref(), Some("1920.00"));
        assert_eq!(estimated_daily_intake(None, Some("ACTIVE")), None);
    }

    #[test]
    fn whole_years_truncate_toward_zero() {
        assert_eq!(
            whole_years_between(date(1995, 6, 15), date(2025, 6, 14)),
            29
        );
        assert_eq!(
            whole_years_between(date(1995, 6, 15), date(2025, 6, 15)),
            30
        );
        // dob less than a year in the future: age 0, not negative
        assert_eq!(whole_years_between(date(2025, 9, 1), date(2025, 6, 15)), 0);
        assert_eq!(whole_years_between(date(2027, 1, 1), date(2025, 6, 15)), -1);
    }

    #[test]
    fn health_snapshot_fields_degrade_independently() {
        let profile = UserProfile {
            current_weight_kg: Some(dec!(70)),
            height_cm: Some(dec!(175)),
            ..UserProfile::default()
        };
        let snapshot = health_snapshot(&profile, date(2025, 6, 15));
        // BMI needs only weight and height; BMR also needs gender and dob
        assert!(snapshot.bmi.is_some());
        assert_eq!(snapshot.bmr_kcal, None);
        assert_eq!(snapshot.estimated_daily_intake_kcal, None);
    }

    #[test]
    fn health_snapshot_full_profile() {
        let profile = UserProfile {
            gender: Some("female".to_owned()),
            date_of_birth: Some(date(2000, 3, 1)),
            current_weight_kg: Some(dec!(60)),
            height_cm: Some(dec!(165)),
            activity_level: "SEDENTARY".to_owned(),
            daily_calorie_goal_kcal: None,
        };
        let snapshot = health_snapshot(&profile, date(2025, 3, 1));
        assert_eq!(
            snapshot.bmr_kcal.map(|v| v.to_string()).as_deref(),
            Some("1345.25")
        );
        // 1345.25 * 1.2 = 1614.30
        assert_eq!(
            snapshot
                .estimated_daily_intake_kcal
                .map(|v| v.to_string())
                .as_deref(),
            Some("1614.30")
        );
    }
}
