use serde::{Deserialize, Serialize};

/// Opaque bearer token handed out by the gateway. The backend never stores
/// it; callers send it back on the payment request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessToken(String);

impl AccessToken {
	pub fn new(token: impl Into<String>) -> Self {
		Self(token.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	pub fn into_inner(self) -> String {
		self.0
	}

	pub fn bearer_header(&self) -> String {
		format!("Bearer {}", self.0)
	}
}
