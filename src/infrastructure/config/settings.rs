use std::fmt;
use std::time::Duration;

use serde::Deserialize;

use crate::domain::credentials::Credentials;

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_MONCASH_BASE_URL: &str =
	"https://sandbox.moncashbutton.digicelgroup.com";
pub const DEFAULT_MONCASH_API_PATH: &str = "/Api";
pub const DEFAULT_MONCASH_REDIRECT_PATH: &str =
	"/Moncash-middleware/Payment/Redirect";
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_SERVER_KEEPALIVE: u64 = 5;

#[derive(Deserialize, Clone)]
pub struct Config {
	pub client_id:             String,
	pub client_secret:         String,
	pub port:                  u16,
	pub moncash_base_url:      String,
	pub moncash_api_path:      String,
	pub moncash_redirect_path: String,
	pub upstream_timeout_secs: u64,
	pub server_keepalive:      u64,
	pub cors_allowed_origins:  Option<String>,
}

impl Config {
	pub fn load() -> Result<Self, config::ConfigError> {
		Self::load_from(config::Environment::default())
	}

	pub fn load_from(
		environment: config::Environment,
	) -> Result<Self, config::ConfigError> {
		let config_builder = config::Config::builder()
			.set_default("port", i64::from(DEFAULT_PORT))?
			.set_default("moncash_base_url", DEFAULT_MONCASH_BASE_URL)?
			.set_default("moncash_api_path", DEFAULT_MONCASH_API_PATH)?
			.set_default("moncash_redirect_path", DEFAULT_MONCASH_REDIRECT_PATH)?
			.set_default(
				"upstream_timeout_secs",
				DEFAULT_UPSTREAM_TIMEOUT_SECS as i64,
			)?
			.set_default("server_keepalive", DEFAULT_SERVER_KEEPALIVE as i64)?
			.add_source(environment)
			.build()?;

		config_builder.try_deserialize()
	}

	pub fn credentials(&self) -> Credentials {
		Credentials::new(&self.client_id, &self.client_secret)
	}

	/// Root of the MonCash REST API, e.g. `https://host/Api`.
	pub fn api_url(&self) -> String {
		join_url(&self.moncash_base_url, &self.moncash_api_path)
	}

	/// Hosted payment page, without the `token` query parameter.
	pub fn redirect_url(&self) -> String {
		join_url(&self.moncash_base_url, &self.moncash_redirect_path)
	}

	pub fn upstream_timeout(&self) -> Duration {
		Duration::from_secs(self.upstream_timeout_secs)
	}

	pub fn allowed_origins(&self) -> Vec<String> {
		self.cors_allowed_origins
			.as_deref()
			.unwrap_or_default()
			.split(',')
			.map(str::trim)
			.filter(|origin| !origin.is_empty())
			.map(str::to_string)
			.collect()
	}
}

impl fmt::Debug for Config {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Config")
			.field("client_id", &self.client_id)
			.field("client_secret", &"<redacted>")
			.field("port", &self.port)
			.field("moncash_base_url", &self.moncash_base_url)
			.field("moncash_api_path", &self.moncash_api_path)
			.field("moncash_redirect_path", &self.moncash_redirect_path)
			.field("upstream_timeout_secs", &self.upstream_timeout_secs)
			.field("server_keepalive", &self.server_keepalive)
			.field("cors_allowed_origins", &self.cors_allowed_origins)
			.finish()
	}
}

fn join_url(base: &str, path: &str) -> String {
	let base = base.trim_end_matches('/');
	let path = path.trim_matches('/');
	if path.is_empty() {
		base.to_string()
	} else {
		format!("{base}/{path}")
	}
}
