// ABOUTME: Typed domain errors raised by the nutrition computation engine
// ABOUTME: AppError variants map to HTTP status codes at the transport boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrikit Project

//! Domain error types.
//!
//! The engine never catches-and-continues per entry: any conversion or
//! lookup failure aborts the whole summarize call. Missing health-metric
//! inputs are not errors; those degrade to `None` fields instead (see
//! [`crate::calculator`]).

use thiserror::Error;

use crate::models::FoodUnit;

/// Unified error type for the nutrition engine
#[derive(Debug, Error)]
pub enum AppError {
    /// A diary, food, macro record, or user profile is absent
    #[error("{0}")]
    NotFound(String),

    /// Input rejected by domain validation
    #[error("{0}")]
    InvalidInput(String),

    /// A unit requires a per-food conversion factor the food does not carry
    #[error("food does not support {unit} unit (no {factor})")]
    MissingConversionFactor {
        /// Unit the entry was logged in
        unit: FoodUnit,
        /// The per-food factor that would be needed
        factor: &'static str,
    },

    /// Unit string outside the supported set; upstream validation should
    /// make this unreachable
    #[error("unsupported unit: {0}")]
    UnsupportedUnit(String),

    /// A collaborator store failed
    #[error("storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

impl AppError {
    /// Resource-absent error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Validation error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// HTTP status code the transport layer should map this error to
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::InvalidInput(_)
            | Self::MissingConversionFactor { .. }
            | Self::UnsupportedUnit(_) => 400,
            Self::Storage(_) => 500,
        }
    }
}

/// Result type alias for engine operations
pub type AppResult<T> = Result<T, AppError>;
