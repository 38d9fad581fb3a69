use actix_web::{
    web,
    http::StatusCode,
    ResponseError,
    HttpResponse,
    error::{JsonPayloadError, QueryPayloadError},
};
use serde_json::json;

/// Contact forms are small; anything bigger is not a form.
const JSON_LIMIT_BYTES: usize = 16 * 1024;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .limit(JSON_LIMIT_BYTES)
            .error_handler(|err, _req| PayloadError::from(err).into()),
    );
    cfg.app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| PayloadError::from(err).into()),
    );
}

#[derive(Debug)]
pub struct PayloadError {
    message: String,
    status: StatusCode
}

impl std::fmt::Display for PayloadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl ResponseError for PayloadError {
    fn status_code(&self) -> StatusCode {
        self.status
    }

    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        let kind = match self.status {
            StatusCode::PAYLOAD_TOO_LARGE => "payload_too_large",
            _ => "bad_request",
        };
        HttpResponse::build(self.status).json(json!({
            "error": kind,
            "message": self.message
        }))
    }
}

impl From<JsonPayloadError> for PayloadError {
    fn from(err: JsonPayloadError) -> Self {
        let status = match err {
            JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
                StatusCode::PAYLOAD_TOO_LARGE
            }
            _ => StatusCode::BAD_REQUEST,
        };
        PayloadError {
            message: format!("JSON payload error: {}", err),
            status,
        }
    }
}

impl From<QueryPayloadError> for PayloadError {
    fn from(err: QueryPayloadError) -> Self {
        PayloadError {
            message: format!("Query string error: {}", err),
            status: StatusCode::BAD_REQUEST,
        }
    }
}
