use crate::domain::access_token::AccessToken;
use crate::domain::order_id::OrderId;
use crate::domain::payment::{Amount, PaymentResult};

#[derive(Debug, Clone)]
pub struct CreatePaymentCommand {
	pub access_token: AccessToken,
	pub amount:       Amount,
}

#[derive(Debug, Clone)]
pub struct PaymentOutcome {
	pub order_id: OrderId,
	pub result:   PaymentResult,
}
