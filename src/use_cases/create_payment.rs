use log::info;
use serde_json::Value;

use crate::domain::gateway::{GatewayError, PaymentGateway};
use crate::domain::order_id::OrderId;
use crate::domain::payment::{PaymentRequest, PaymentResult};
use crate::use_cases::dto::{CreatePaymentCommand, PaymentOutcome};

#[derive(Clone)]
pub struct CreatePaymentUseCase<G: PaymentGateway> {
	gateway: G,
}

impl<G: PaymentGateway> CreatePaymentUseCase<G> {
	pub fn new(gateway: G) -> Self {
		Self { gateway }
	}

	/// Every call registers a new order; nothing is deduplicated.
	pub async fn execute(
		&self,
		command: CreatePaymentCommand,
	) -> Result<PaymentOutcome, GatewayError> {
		let request = PaymentRequest {
			amount:   command.amount,
			order_id: OrderId::generate(),
		};

		let response = self
			.gateway
			.create_payment(&command.access_token, &request)
			.await?;

		let result = match payment_token(&response) {
			Some(token) => PaymentResult::Redirect {
				payment_url: self.gateway.payment_redirect_url(token),
			},
			None => {
				info!(
					"Gateway answered order {} without a payment token",
					request.order_id
				);
				PaymentResult::Passthrough(response)
			}
		};

		Ok(PaymentOutcome {
			order_id: request.order_id,
			result,
		})
	}
}

fn payment_token(response: &Value) -> Option<&str> {
	response
		.pointer("/payment_token/token")
		.and_then(Value::as_str)
		.filter(|token| !token.is_empty())
}
