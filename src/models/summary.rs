// ABOUTME: Computed summary DTOs: Macros value type, entry/meal/diary summaries
// ABOUTME: camelCase serde names are the interop surface consumed by clients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrikit Project

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::ops::Add;
use uuid::Uuid;

use super::diary::{FoodUnit, Meal};
use crate::rounding::round2;

/// Macronutrient amounts in grams.
///
/// Component-wise addition is the aggregation operation; the all-zero value
/// is its identity. Output values are rounded to 2 decimals, half-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Macros {
    /// Protein grams
    pub protein_g: Decimal,
    /// Fat grams
    pub fat_g: Decimal,
    /// Carbohydrate grams
    pub carb_g: Decimal,
}

impl Macros {
    /// Additive identity
    pub const ZERO: Self = Self {
        protein_g: Decimal::ZERO,
        fat_g: Decimal::ZERO,
        carb_g: Decimal::ZERO,
    };

    /// Each component rounded to 2 decimals, half-up
    #[must_use]
    pub fn rounded(&self) -> Self {
        Self {
            protein_g: round2(self.protein_g),
            fat_g: round2(self.fat_g),
            carb_g: round2(self.carb_g),
        }
    }
}

impl Add for Macros {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            protein_g: self.protein_g + rhs.protein_g,
            fat_g: self.fat_g + rhs.fat_g,
            carb_g: self.carb_g + rhs.carb_g,
        }
    }
}

/// Computed summary of a single diary entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntrySummary {
    /// Entry id
    pub id: Uuid,
    /// Referenced food id
    pub food_id: Uuid,
    /// First available display name of the food, if any translation exists
    pub food_name: Option<String>,
    /// Logged amount, in `unit`
    pub amount: Decimal,
    /// Unit the amount was logged in
    pub unit: FoodUnit,
    /// Converted weight in grams
    pub grams: Decimal,
    /// Kilocalories (Atwater 4/9/4 over the scaled macros)
    pub kcal: Decimal,
    /// Scaled macronutrients
    pub macros: Macros,
}

/// Computed summary of one meal within a diary
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealSummary {
    /// Meal this summary covers
    pub meal: Meal,
    /// Sum of the entries' already-rounded kcal, rounded once more
    pub total_kcal: Decimal,
    /// Meal kcal over the daily calorie goal, as a fraction
    pub percent_of_daily_goal: Option<Decimal>,
    /// Meal kcal over the estimated daily intake, as a fraction
    pub percent_of_estimated_intake: Option<Decimal>,
    /// Component-wise sum of the entries' macros
    pub macros: Macros,
    /// Entries of this meal, in diary order
    pub entries: Vec<EntrySummary>,
}

/// Computed summary of a whole diary.
///
/// Percentage fields are fractions (0.5000 means 50%) and are deliberately
/// unclamped; eating past the goal yields values above 1.0000.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiarySummary {
    /// Diary id
    pub diary_id: Uuid,
    /// Owning user id
    pub owner_id: Uuid,
    /// Calendar day the diary covers
    pub date: NaiveDate,
    /// Sum of the meals' kcal
    pub total_kcal: Decimal,
    /// Diary kcal over the daily calorie goal
    pub percent_of_daily_goal: Option<Decimal>,
    /// Diary kcal over the estimated daily intake
    pub percent_of_estimated_intake: Option<Decimal>,
    /// Sum of the meals' macros
    pub macros: Macros,
    /// Meal summaries, in first-seen entry order
    pub meals: Vec<MealSummary>,
}
