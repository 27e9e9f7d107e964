use derive_more::derive::{Display, Error};
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::domain::order_id::OrderId;

#[derive(Debug, Display, Error, PartialEq)]
pub enum InvalidAmount {
	#[display("amount is required")]
	Missing,
	#[display("amount must be a number, got {raw}")]
	NotANumber { raw: String },
	#[display("amount must be finite")]
	NotFinite,
	#[display("amount must be greater than zero, got {value}")]
	NotPositive { value: f64 },
}

/// Every integer up to this magnitude has an exact `f64` representation.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Payment amount accepted from callers. Always positive and finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Amount(f64);

impl Amount {
	pub fn new(value: f64) -> Result<Self, InvalidAmount> {
		if !value.is_finite() {
			return Err(InvalidAmount::NotFinite);
		}
		if value <= 0.0 {
			return Err(InvalidAmount::NotPositive { value });
		}
		Ok(Self(value))
	}

	/// Reads an amount sent either as a JSON number or as a numeric string.
	pub fn from_json(value: Option<&Value>) -> Result<Self, InvalidAmount> {
		match value {
			None | Some(Value::Null) => Err(InvalidAmount::Missing),
			Some(Value::Number(number)) => {
				let parsed = number.as_f64().ok_or(InvalidAmount::NotFinite)?;
				Self::new(parsed)
			}
			Some(Value::String(raw)) => {
				let trimmed = raw.trim();
				if trimmed.is_empty() {
					return Err(InvalidAmount::Missing);
				}
				let parsed = trimmed.parse::<f64>().map_err(|_| {
					InvalidAmount::NotANumber { raw: raw.clone() }
				})?;
				Self::new(parsed)
			}
			Some(other) => Err(InvalidAmount::NotANumber {
				raw: other.to_string(),
			}),
		}
	}

	pub fn value(&self) -> f64 {
		self.0
	}
}

/// Whole amounts go out as JSON integers (`100`, not `100.0`).
impl Serialize for Amount {
	fn serialize<S: Serializer>(
		&self,
		serializer: S,
	) -> Result<S::Ok, S::Error> {
		if self.0.fract() == 0.0 && self.0 <= MAX_EXACT_INTEGER {
			serializer.serialize_u64(self.0 as u64)
		} else {
			serializer.serialize_f64(self.0)
		}
	}
}

/// Body of the upstream `CreatePayment` call.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentRequest {
	pub amount:   Amount,
	#[serde(rename = "orderId")]
	pub order_id: OrderId,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PaymentResult {
	/// Hosted payment page the customer should be sent to.
	Redirect { payment_url: String },
	/// Upstream answered without a payment token; its body is passed through.
	Passthrough(Value),
}
