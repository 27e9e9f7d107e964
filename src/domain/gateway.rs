use async_trait::async_trait;
use derive_more::derive::{Display, Error};
use serde_json::Value;

use crate::domain::access_token::AccessToken;
use crate::domain::payment::PaymentRequest;

#[derive(Debug, Display, Error)]
pub enum GatewayError {
	/// The gateway answered with a non-2xx status. `body` holds its JSON
	/// payload, or the raw text when the payload was not JSON.
	#[display("gateway rejected the request with status {status}")]
	Rejected { status: u16, body: Value },
	#[display("gateway did not answer in time: {message}")]
	Timeout { message: String },
	#[display("{message}")]
	Transport { message: String },
	#[display("{message}")]
	InvalidResponse { message: String },
}

impl GatewayError {
	/// `message` field of a rejection body, when the gateway provided one.
	pub fn upstream_message(&self) -> Option<&str> {
		match self {
			GatewayError::Rejected { body, .. } => {
				body.get("message").and_then(Value::as_str)
			}
			_ => None,
		}
	}
}

#[async_trait]
pub trait PaymentGateway: Send + Sync + 'static {
	/// Runs the client-credentials grant and returns the issued token.
	async fn request_token(&self) -> Result<AccessToken, GatewayError>;

	/// Registers a payment and returns the gateway's JSON answer untouched.
	async fn create_payment(
		&self,
		access_token: &AccessToken,
		request: &PaymentRequest,
	) -> Result<Value, GatewayError>;

	/// Hosted page where the customer completes a payment.
	fn payment_redirect_url(&self, payment_token: &str) -> String;
}
