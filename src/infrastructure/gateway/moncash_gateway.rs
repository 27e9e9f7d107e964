use std::time::Duration;

use async_trait::async_trait;
use log::{error, warn};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Response};
use serde::Deserialize;
use serde_json::Value;

use crate::domain::access_token::AccessToken;
use crate::domain::credentials::Credentials;
use crate::domain::gateway::{GatewayError, PaymentGateway};
use crate::domain::payment::PaymentRequest;

const TOKEN_PATH: &str = "/oauth/token";
const CREATE_PAYMENT_PATH: &str = "/v1/CreatePayment";
const TOKEN_GRANT_BODY: &str = "grant_type=client_credentials&scope=read,write";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
const JSON_CONTENT_TYPE: &str = "application/json";

#[derive(Debug, Deserialize)]
struct TokenResponse {
	access_token: String,
}

/// MonCash REST client. Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct MonCashGateway {
	http_client:  Client,
	credentials:  Credentials,
	api_url:      String,
	redirect_url: String,
	timeout:      Duration,
}

impl MonCashGateway {
	pub fn new(
		http_client: Client,
		credentials: Credentials,
		api_url: impl Into<String>,
		redirect_url: impl Into<String>,
		timeout: Duration,
	) -> Self {
		Self {
			http_client,
			credentials,
			api_url: api_url.into().trim_end_matches('/').to_string(),
			redirect_url: redirect_url.into(),
			timeout,
		}
	}

	fn endpoint(&self, path: &str) -> String {
		format!("{}{path}", self.api_url)
	}

	/// Bounds the whole exchange, body included, by the configured timeout.
	async fn bounded<T, F>(&self, exchange: F) -> Result<T, GatewayError>
	where
		F: Future<Output = Result<T, GatewayError>>,
	{
		match tokio::time::timeout(self.timeout, exchange).await {
			Ok(result) => result,
			Err(_) => Err(GatewayError::Timeout {
				message: format!(
					"no answer from {} within {:?}",
					self.api_url, self.timeout
				),
			}),
		}
	}
}

fn transport_error(e: reqwest::Error) -> GatewayError {
	if e.is_timeout() {
		GatewayError::Timeout {
			message: e.to_string(),
		}
	} else {
		GatewayError::Transport {
			message: e.to_string(),
		}
	}
}

/// Turns a non-2xx answer into [`GatewayError::Rejected`]. Bodies that are
/// not JSON are kept as a plain string.
async fn rejection(response: Response) -> GatewayError {
	let status = response.status().as_u16();
	let body = match response.text().await {
		Ok(text) => serde_json::from_str(&text).unwrap_or(Value::String(text)),
		Err(e) => return transport_error(e),
	};
	GatewayError::Rejected { status, body }
}

async fn json_body<T: serde::de::DeserializeOwned>(
	response: Response,
) -> Result<T, GatewayError> {
	let bytes = response.bytes().await.map_err(transport_error)?;
	serde_json::from_slice(&bytes).map_err(|e| GatewayError::InvalidResponse {
		message: e.to_string(),
	})
}

impl MonCashGateway {
	async fn exchange_token(
		&self,
		url: &str,
	) -> Result<AccessToken, GatewayError> {
		let response = self
			.http_client
			.post(url)
			.header(AUTHORIZATION, self.credentials.basic_auth_header())
			.header(CONTENT_TYPE, FORM_CONTENT_TYPE)
			.header(ACCEPT, JSON_CONTENT_TYPE)
			.body(TOKEN_GRANT_BODY)
			.send()
			.await
			.map_err(transport_error)?;

		if !response.status().is_success() {
			let err = rejection(response).await;
			warn!(
				"MonCash token request for client {} failed: {err}",
				self.credentials.client_id()
			);
			return Err(err);
		}

		let token: TokenResponse = json_body(response).await?;
		Ok(AccessToken::new(token.access_token))
	}

	async fn exchange_payment(
		&self,
		url: &str,
		access_token: &AccessToken,
		request: &PaymentRequest,
	) -> Result<Value, GatewayError> {
		let response = self
			.http_client
			.post(url)
			.header(AUTHORIZATION, access_token.bearer_header())
			.header(ACCEPT, JSON_CONTENT_TYPE)
			.json(request)
			.send()
			.await
			.map_err(transport_error)?;

		if !response.status().is_success() {
			let err = rejection(response).await;
			warn!(
				"MonCash rejected payment for order {}: {err}",
				request.order_id
			);
			return Err(err);
		}

		json_body(response).await
	}
}

#[async_trait]
impl PaymentGateway for MonCashGateway {
	async fn request_token(&self) -> Result<AccessToken, GatewayError> {
		let url = self.endpoint(TOKEN_PATH);
		self.bounded(self.exchange_token(&url))
			.await
			.inspect_err(|e| {
				if !matches!(e, GatewayError::Rejected { .. }) {
					error!("Error getting access token from {url}: {e}");
				}
			})
	}

	async fn create_payment(
		&self,
		access_token: &AccessToken,
		request: &PaymentRequest,
	) -> Result<Value, GatewayError> {
		let url = self.endpoint(CREATE_PAYMENT_PATH);
		self.bounded(self.exchange_payment(&url, access_token, request))
			.await
			.inspect_err(|e| {
				if !matches!(e, GatewayError::Rejected { .. }) {
					error!(
						"Error creating payment for order {}: {e}",
						request.order_id
					);
				}
			})
	}

	fn payment_redirect_url(&self, payment_token: &str) -> String {
		format!("{}?token={payment_token}", self.redirect_url)
	}
}
