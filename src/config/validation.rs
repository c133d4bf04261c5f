//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, addresses parse)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServiceConfig → Result<(), Vec<ValidationError>>

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::ServiceConfig;

/// A single semantic problem with a loaded configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field}: '{value}' is not a socket address")]
    InvalidAddress { field: &'static str, value: String },

    #[error("{field} must be greater than zero")]
    ZeroDuration { field: &'static str },

    #[error("store.path must not be empty")]
    EmptyStorePath,
}

pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field: "listener.bind_address",
            value: config.listener.bind_address.clone(),
        });
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidAddress {
            field: "observability.metrics_address",
            value: config.observability.metrics_address.clone(),
        });
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroDuration {
            field: "timeouts.request_secs",
        });
    }

    if config.store.busy_timeout_ms == 0 {
        errors.push(ValidationError::ZeroDuration {
            field: "store.busy_timeout_ms",
        });
    }

    if config.store.path.trim().is_empty() {
        errors.push(ValidationError::EmptyStorePath);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
