// ABOUTME: Activity-level registry and application-wide constants
// ABOUTME: Five fixed TDEE tiers plus the shared-catalog owner sentinel id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrikit Project

//! Application constants.
//!
//! The activity multipliers follow McArdle et al. (2010): 1.2 for sedentary
//! up to 1.9 for very active. Parsing accepts either the internal name
//! (`MODERATELY_ACTIVE`) or the display label (`Moderately active`),
//! case-insensitively.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use uuid::{uuid, Uuid};

use crate::errors::AppError;

/// Owner id of the shared food/exercise catalog.
///
/// Catalog stores are owner-scoped; callers pass this sentinel explicitly to
/// address shared entries. The engine itself never consults it — resolved
/// records arrive through the store ports regardless of logical owner.
pub const SHARED_OWNER_ID: Uuid = uuid!("7f761e74-2297-4b79-92f2-55307de133a4");

/// Activity level for estimated-daily-intake (TDEE) calculation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Exercise 1-3 days/week
    LightlyActive,
    /// Exercise 3-5 days/week
    ModeratelyActive,
    /// Exercise 6-7 days/week
    Active,
    /// Hard training twice a day
    VeryActive,
}

impl ActivityLevel {
    /// All tiers, lowest multiplier first
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::LightlyActive,
        Self::ModeratelyActive,
        Self::Active,
        Self::VeryActive,
    ];

    /// Internal name, as stored on user profiles
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sedentary => "SEDENTARY",
            Self::LightlyActive => "LIGHTLY_ACTIVE",
            Self::ModeratelyActive => "MODERATELY_ACTIVE",
            Self::Active => "ACTIVE",
            Self::VeryActive => "VERY_ACTIVE",
        }
    }

    /// Human-readable display label
    #[must_use]
    pub const fn display(self) -> &'static str {
        match self {
            Self::Sedentary => "Sedentary",
            Self::LightlyActive => "Lightly active",
            Self::ModeratelyActive => "Moderately active",
            Self::Active => "Active",
            Self::VeryActive => "Very active",
        }
    }

    /// TDEE multiplier applied to BMR
    #[must_use]
    pub fn multiplier(self) -> Decimal {
        match self {
            Self::Sedentary => dec!(1.2),
            Self::LightlyActive => dec!(1.375),
            Self::ModeratelyActive => dec!(1.55),
            Self::Active => dec!(1.725),
            Self::VeryActive => dec!(1.9),
        }
    }

    /// Parse by internal name first, then display label, case-insensitively.
    /// Blank or absent input yields `None`.
    #[must_use]
    pub fn from_string(value: Option<&str>) -> Option<Self> {
        let norm = value?.trim();
        if norm.is_empty() {
            return None;
        }
        Self::ALL
            .into_iter()
            .find(|level| level.name().eq_ignore_ascii_case(norm))
            .or_else(|| {
                Self::ALL
                    .into_iter()
                    .find(|level| level.display().eq_ignore_ascii_case(norm))
            })
    }

    /// Lenient call-site policy: unparseable input silently falls back to
    /// [`ActivityLevel::Sedentary`]. Used by estimated-intake computation so
    /// a malformed profile value never blocks a summary.
    #[must_use]
    pub fn parse_or_default(value: Option<&str>) -> Self {
        Self::from_string(value).unwrap_or(Self::Sedentary)
    }

    /// Strict call-site policy: unparseable input is a validation error.
    /// Used when a profile update supplies a new activity level.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidInput`] when the value matches neither an
    /// internal name nor a display label.
    pub fn parse_or_fail(value: &str) -> Result<Self, AppError> {
        Self::from_string(Some(value))
            .ok_or_else(|| AppError::invalid_input("Invalid activityLevel"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multipliers_are_fixed() {
        assert_eq!(ActivityLevel::Sedentary.multiplier(), dec!(1.2));
        assert_eq!(ActivityLevel::LightlyActive.multiplier(), dec!(1.375));
        assert_eq!(ActivityLevel::ModeratelyActive.multiplier(), dec!(1.55));
        assert_eq!(ActivityLevel::Active.multiplier(), dec!(1.725));
        assert_eq!(ActivityLevel::VeryActive.multiplier(), dec!(1.9));
    }

    #[test]
    fn parses_names_and_display_labels_case_insensitively() {
        for level in ActivityLevel::ALL {
            assert_eq!(ActivityLevel::from_string(Some(level.name())), Some(level));
            assert_eq!(
                ActivityLevel::from_string(Some(&level.name().to_lowercase())),
                Some(level)
            );
            assert_eq!(
                ActivityLevel::from_string(Some(level.display())),
                Some(level)
            );
            assert_eq!(
                ActivityLevel::from_string(Some(&level.display().to_uppercase())),
                Some(level)
            );
        }
        assert_eq!(
            ActivityLevel::from_string(Some("  Lightly active  ")),
            Some(ActivityLevel::LightlyActive)
        );
    }

    #[test]
    fn unknown_blank_and_absent_yield_none() {
        assert_eq!(ActivityLevel::from_string(Some("unknown")), None);
        assert_eq!(ActivityLevel::from_string(Some("   ")), None);
        assert_eq!(ActivityLevel::from_string(None), None);
    }

    #[test]
    fn parse_policies_diverge_on_bad_input() {
        assert_eq!(
            ActivityLevel::parse_or_default(Some("couch potato")),
            ActivityLevel::Sedentary
        );
        assert!(matches!(
            ActivityLevel::parse_or_fail("couch potato"),
            Err(AppError::InvalidInput(_))
        ));
        assert_eq!(
            ActivityLevel::parse_or_fail("Very active").ok(),
            Some(ActivityLevel::VeryActive)
        );
    }

    #[test]
    fn shared_owner_id_is_fixed() {
        assert_eq!(
            SHARED_OWNER_ID.to_string(),
            "7f761e74-2297-4b79-92f2-55307de133a4"
        );
    }
}
