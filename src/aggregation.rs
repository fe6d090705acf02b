// ABOUTME: Macro scaling, Atwater calorie computation, and goal-ratio helpers
// ABOUTME: Every aggregation stage rounds independently; totals sum rounded values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrikit Project

//! Macro and calorie aggregation.
//!
//! Rounding policy: each stage rounds independently — entry macros after
//! scaling, entry kcal from the rounded macros, meal and diary totals after
//! summing the already-rounded values below them. Summed totals can
//! therefore differ by up to 0.01 per component from a fully unrounded
//! computation; that is the contract, not an accident, and the literal test
//! expectations depend on it.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::{FoodMacros, Macros};
use crate::rounding::{half_up, round2};

/// Atwater energy factor for protein, kcal per gram
pub const PROTEIN_KCAL_PER_G: Decimal = dec!(4);
/// Atwater energy factor for fat, kcal per gram
pub const FAT_KCAL_PER_G: Decimal = dec!(9);
/// Atwater energy factor for carbohydrate, kcal per gram
pub const CARB_KCAL_PER_G: Decimal = dec!(4);

const HUNDRED: Decimal = dec!(100);

/// Scale a per-100g macro profile to an eaten weight.
///
/// The scale factor `grams / 100` is taken at 12-decimal precision; each
/// component is scaled and then rounded to 2 decimals independently.
#[must_use]
pub fn macros_for(grams: Decimal, per_100g: &FoodMacros) -> Macros {
    let factor = half_up(grams / HUNDRED, 12);
    Macros {
        protein_g: per_100g.protein_g * factor,
        fat_g: per_100g.fat_g * factor,
        carb_g: per_100g.carb_g * factor,
    }
    .rounded()
}

/// Kilocalories of a macro profile: Atwater `4·protein + 9·fat + 4·carb`,
/// rounded to 2 decimals half-up. The data model carries no fiber or
/// alcohol component, so neither does the formula.
#[must_use]
pub fn kcal_for(macros: &Macros) -> Decimal {
    round2(
        macros.protein_g * PROTEIN_KCAL_PER_G
            + macros.fat_g * FAT_KCAL_PER_G
            + macros.carb_g * CARB_KCAL_PER_G,
    )
}

/// Component-wise sum of macro values, rounded once more after summing
#[must_use]
pub fn sum_macros<'a>(items: impl Iterator<Item = &'a Macros>) -> Macros {
    items
        .fold(Macros::ZERO, |acc, m| acc + m.clone())
        .rounded()
}

/// Sum of already-rounded kcal values, rounded once more.
///
/// Deliberately sums the per-item kcal instead of recomputing from the
/// summed macros; the two can diverge by cents.
#[must_use]
pub fn sum_kcal<'a>(items: impl Iterator<Item = &'a Decimal>) -> Decimal {
    round2(items.sum::<Decimal>())
}

/// Fraction of `numerator` over an optional denominator.
///
/// `None` when the denominator is absent or non-positive; otherwise the
/// quotient at 6-decimal precision rounded to 4 decimals, half-up. The
/// result is a fraction (0.5000 means 50%) and is not clamped at 1.
#[must_use]
pub fn ratio_or_null(numerator: Decimal, denominator: Option<Decimal>) -> Option<Decimal> {
    let denominator = denominator?;
    if denominator <= Decimal::ZERO {
        return None;
    }
    Some(half_up(half_up(numerator / denominator, 6), 4))
}
