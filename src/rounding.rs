// ABOUTME: Half-up decimal rounding at fixed scales, shared by the numeric modules
// ABOUTME: Mirrors BigDecimal setScale(n, HALF_UP) including trailing-zero padding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrikit Project

use rust_decimal::{Decimal, RoundingStrategy};

/// Round to `dp` decimal places, half-up, and pad the scale to exactly `dp`.
///
/// All domain quantities are non-negative, so midpoint-away-from-zero is
/// half-up. The rescale keeps output scales stable (165 becomes 165.00),
/// which the serialized summary relies on.
pub(crate) fn half_up(value: Decimal, dp: u32) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(dp);
    rounded
}

/// Round to 2 decimal places, half-up — the output scale for grams,
/// kilocalories, and macro components.
pub(crate) fn round2(value: Decimal) -> Decimal {
    half_up(value, 2)
}
