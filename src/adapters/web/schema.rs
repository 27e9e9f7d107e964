use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /api/create-payment`. Fields are optional here so that
/// missing values surface as validation errors rather than extractor
/// failures.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct CreatePaymentRequest {
	#[serde(rename = "accessToken", default)]
	pub access_token: Option<String>,
	#[serde(default)]
	pub amount:       Option<Value>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TokenResponse {
	#[serde(rename = "accessToken")]
	pub access_token: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PaymentUrlResponse {
	#[serde(rename = "paymentUrl")]
	pub payment_url: String,
}
