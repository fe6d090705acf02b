// ABOUTME: User profile view consumed by the health metric calculators
// ABOUTME: Every body metric is optional; calculators degrade to None, not errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrikit Project

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Profile view of a diary owner.
///
/// `activity_level` holds the internal name of an
/// [`crate::constants::ActivityLevel`]; profile updates validate it with the
/// strict parse policy, while intake estimation falls back to `SEDENTARY`
/// when the stored value no longer parses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Self-reported gender; "male"/"m" and "female"/"f" select the BMR
    /// formula, anything else leaves BMR unset
    pub gender: Option<String>,
    /// Date of birth, for age in the BMR formula
    pub date_of_birth: Option<NaiveDate>,
    /// Current body weight in kilograms
    pub current_weight_kg: Option<Decimal>,
    /// Height in centimeters
    pub height_cm: Option<Decimal>,
    /// Activity level name, e.g. `SEDENTARY`
    pub activity_level: String,
    /// Self-set daily calorie goal
    pub daily_calorie_goal_kcal: Option<Decimal>,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            gender: None,
            date_of_birth: None,
            current_weight_kg: None,
            height_cm: None,
            activity_level: "SEDENTARY".to_owned(),
            daily_calorie_goal_kcal: None,
        }
    }
}
