use std::fmt;

use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

const ORDER_PREFIX: &str = "ORDER";
const SUFFIX_LEN: usize = 9;
const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Merchant-side order reference sent along with every payment, shaped as
/// `ORDER-<unix millis>-<9 base36 chars>`.
///
/// The suffix is drawn from a v4 UUID. Nothing checks for collisions, so two
/// orders created in the same millisecond are only distinct with high
/// probability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
	pub fn generate() -> Self {
		let now = OffsetDateTime::now_utc();
		let millis = now.unix_timestamp_nanos() / 1_000_000;
		Self::from_parts(millis, Uuid::new_v4().as_u128())
	}

	fn from_parts(millis: i128, entropy: u128) -> Self {
		let mut remaining = entropy;
		let mut suffix = String::with_capacity(SUFFIX_LEN);
		for _ in 0..SUFFIX_LEN {
			suffix.push(BASE36_DIGITS[(remaining % 36) as usize] as char);
			remaining /= 36;
		}
		Self(format!("{ORDER_PREFIX}-{millis}-{suffix}"))
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for OrderId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}
