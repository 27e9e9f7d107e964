use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Client credentials issued by MonCash for the OAuth client-credentials
/// grant.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
	client_id:     String,
	client_secret: String,
}

impl Credentials {
	pub fn new(
		client_id: impl Into<String>,
		client_secret: impl Into<String>,
	) -> Self {
		Self {
			client_id:     client_id.into(),
			client_secret: client_secret.into(),
		}
	}

	pub fn client_id(&self) -> &str {
		&self.client_id
	}

	/// Value for the `Authorization` header of the token request.
	pub fn basic_auth_header(&self) -> String {
		let encoded =
			STANDARD.encode(format!("{}:{}", self.client_id, self.client_secret));
		format!("Basic {encoded}")
	}
}

impl fmt::Debug for Credentials {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Credentials")
			.field("client_id", &self.client_id)
			.field("client_secret", &"<redacted>")
			.finish()
	}
}
