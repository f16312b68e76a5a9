// Copyright (c) 2025 - Cowboy AI, Inc.
//! HTTP error mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};

use crate::errors::TopologyError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("DB file is not valid: {0}")]
    InvalidTopology(String),
    #[error("Not Found: {0}")]
    NotFound(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<TopologyError> for ApiError {
    fn from(err: TopologyError) -> Self {
        match err {
            TopologyError::Format(_) | TopologyError::Invalid(_) => {
                ApiError::InvalidTopology(err.to_string())
            }
            TopologyError::UnknownDevice(_) | TopologyError::UnknownRack(_) => {
                ApiError::NotFound(err.to_string())
            }
            TopologyError::Io { .. } => ApiError::Internal(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            ApiError::InvalidTopology(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status_code.is_server_error() {
            error!("{}", self);
        } else {
            warn!("{}", self);
        }

        (status_code, self.to_string()).into_response()
    }
}
