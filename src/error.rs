use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Failures that abort the extraction of a whole movie record.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("required field `{0}` not found")]
    MissingRequiredField(&'static str),

    #[error("malformed rating block: {0}")]
    MalformedRatingBlock(String),

    #[error("unrecognized award cell: {0}")]
    UnrecognizedAwardCell(String),

    #[error("document is not valid UTF-8: {0}")]
    NotUtf8(#[from] std::str::Utf8Error),
}

#[derive(Debug, Error)]
#[error("unsupported listing `{0}`, choose from top250, bottom100, top250-english")]
pub struct UnknownListing(pub String);

#[derive(Debug, Error)]
#[error("invalid movie id `{0}`, IMDb ids start at 1")]
pub struct InvalidMovieId(pub u32);

#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for AppError {}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self(err)
    }
}

impl From<ExtractError> for AppError {
    fn from(err: ExtractError) -> Self {
        Self(anyhow::Error::new(err))
    }
}

impl From<UnknownListing> for AppError {
    fn from(err: UnknownListing) -> Self {
        Self(anyhow::Error::new(err))
    }
}

impl From<InvalidMovieId> for AppError {
    fn from(err: InvalidMovieId) -> Self {
        Self(anyhow::Error::new(err))
    }
}

impl From<sea_orm::DbErr> for AppError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self(anyhow::Error::new(err))
    }
}

impl From<wreq::Error> for AppError {
    fn from(err: wreq::Error) -> Self {
        Self(anyhow::Error::new(err))
    }
}

impl AppError {
    fn status(&self) -> StatusCode {
        if self.0.is::<ExtractError>() {
            StatusCode::UNPROCESSABLE_ENTITY
        } else if self.0.is::<UnknownListing>() || self.0.is::<InvalidMovieId>() {
            StatusCode::BAD_REQUEST
        } else if self.0.is::<wreq::Error>() {
            StatusCode::BAD_GATEWAY
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        }
        let body = serde_json::json!({ "error": self.to_string() });
        (status, Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extraction_failures_map_to_unprocessable() {
        let err: AppError = ExtractError::MissingRequiredField("title").into();
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.to_string(), "required field `title` not found");
    }

    #[test]
    fn unknown_listing_maps_to_bad_request() {
        let err: AppError = UnknownListing("popular".to_string()).into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn zero_movie_id_maps_to_bad_request() {
        let err: AppError = InvalidMovieId(0).into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn other_errors_map_to_internal() {
        let err: AppError = anyhow::anyhow!("boom").into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
