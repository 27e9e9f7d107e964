use actix_web::error::JsonPayloadError;
use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpRequest, HttpResponse, error};
use derive_more::derive::{Display, Error};
use serde::Serialize;
use serde_json::Value;

use crate::domain::gateway::GatewayError;

const TOKEN_FALLBACK_MESSAGE: &str = "Failed to get access token";
const PAYMENT_FALLBACK_MESSAGE: &str = "Payment creation failed";

#[derive(Serialize)]
struct ErrorResponse {
	error:   String,
	#[serde(skip_serializing_if = "Option::is_none")]
	status:  Option<u16>,
	#[serde(skip_serializing_if = "Option::is_none")]
	details: Option<Value>,
}

#[derive(Debug, Display, Error)]
pub enum ApiError {
	/// The gateway refused the request; its status is passed on to the
	/// caller.
	#[display("{message}")]
	Upstream {
		status:  StatusCode,
		message: String,
		details: Option<Value>,
	},
	#[display("Upstream request timed out")]
	GatewayTimeout { details: String },
	#[display("Internal server error")]
	InternalServerError { details: String },
	#[display("{message}")]
	BadClientData {
		message: String,
		details: Option<String>,
	},
}

impl ApiError {
	/// Maps a failed token request. Rejections keep the upstream status and
	/// body so callers can see why MonCash refused the credentials.
	pub fn from_token_error(err: GatewayError) -> Self {
		match err {
			GatewayError::Rejected { status, ref body } => ApiError::Upstream {
				status:  upstream_status(status),
				message: err
					.upstream_message()
					.unwrap_or(TOKEN_FALLBACK_MESSAGE)
					.to_string(),
				details: Some(body.clone()),
			},
			other => Self::from_failure(other),
		}
	}

	pub fn from_payment_error(err: GatewayError) -> Self {
		match err {
			GatewayError::Rejected { status, .. } => ApiError::Upstream {
				status:  upstream_status(status),
				message: err
					.upstream_message()
					.unwrap_or(PAYMENT_FALLBACK_MESSAGE)
					.to_string(),
				details: None,
			},
			other => Self::from_failure(other),
		}
	}

	fn from_failure(err: GatewayError) -> Self {
		match err {
			GatewayError::Timeout { message } => {
				ApiError::GatewayTimeout { details: message }
			}
			other => ApiError::InternalServerError {
				details: other.to_string(),
			},
		}
	}

	fn body(&self) -> ErrorResponse {
		match self {
			ApiError::Upstream {
				status, details, ..
			} => ErrorResponse {
				error:   self.to_string(),
				// status is echoed only next to the upstream body
				status:  details.as_ref().map(|_| status.as_u16()),
				details: details.clone(),
			},
			ApiError::GatewayTimeout { details } |
			ApiError::InternalServerError { details } => ErrorResponse {
				error:   self.to_string(),
				status:  None,
				details: Some(Value::String(details.clone())),
			},
			ApiError::BadClientData { details, .. } => ErrorResponse {
				error:   self.to_string(),
				status:  None,
				details: details.clone().map(Value::String),
			},
		}
	}
}

/// Non-error statuses never reach here through [`GatewayError::Rejected`]
/// except for odd 1xx/3xx answers; those are reported as a bad gateway.
fn upstream_status(status: u16) -> StatusCode {
	StatusCode::from_u16(status)
		.ok()
		.filter(|code| code.is_client_error() || code.is_server_error())
		.unwrap_or(StatusCode::BAD_GATEWAY)
}

impl error::ResponseError for ApiError {
	fn error_response(&self) -> HttpResponse {
		HttpResponse::build(self.status_code())
			.content_type(ContentType::json())
			.json(self.body())
	}

	fn status_code(&self) -> StatusCode {
		match self {
			ApiError::Upstream { status, .. } => *status,
			ApiError::GatewayTimeout { .. } => StatusCode::GATEWAY_TIMEOUT,
			ApiError::InternalServerError { .. } => {
				StatusCode::INTERNAL_SERVER_ERROR
			}
			ApiError::BadClientData { .. } => StatusCode::BAD_REQUEST,
		}
	}
}

/// Renders malformed request bodies with the same envelope as every other
/// error instead of actix's plain-text default.
pub fn json_error_handler(
	err: JsonPayloadError,
	_req: &HttpRequest,
) -> actix_web::Error {
	ApiError::BadClientData {
		message: "Invalid request body".to_string(),
		details: Some(err.to_string()),
	}
	.into()
}
