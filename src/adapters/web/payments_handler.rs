use actix_web::{HttpResponse, post, web};
use log::{info, warn};

use crate::adapters::web::errors::ApiError;
use crate::adapters::web::schema::{CreatePaymentRequest, PaymentUrlResponse};
use crate::domain::access_token::AccessToken;
use crate::domain::payment::{Amount, PaymentResult};
use crate::infrastructure::gateway::moncash_gateway::MonCashGateway;
use crate::use_cases::create_payment::CreatePaymentUseCase;
use crate::use_cases::dto::CreatePaymentCommand;

#[post("/api/create-payment")]
pub async fn create_payment(
	payload: web::Json<CreatePaymentRequest>,
	create_payment_use_case: web::Data<CreatePaymentUseCase<MonCashGateway>>,
) -> Result<HttpResponse, ApiError> {
	let command = into_command(payload.into_inner())?;

	let outcome = create_payment_use_case
		.execute(command)
		.await
		.map_err(ApiError::from_payment_error)?;

	match outcome.result {
		PaymentResult::Redirect { payment_url } => {
			info!("Payment {} created, redirecting customer", outcome.order_id);
			Ok(HttpResponse::Ok().json(PaymentUrlResponse { payment_url }))
		}
		PaymentResult::Passthrough(body) => Ok(HttpResponse::Ok().json(body)),
	}
}

fn into_command(
	request: CreatePaymentRequest,
) -> Result<CreatePaymentCommand, ApiError> {
	let access_token = request
		.access_token
		.filter(|token| !token.trim().is_empty())
		.ok_or_else(|| ApiError::BadClientData {
			message: "accessToken is required".to_string(),
			details: None,
		})?;

	let amount = Amount::from_json(request.amount.as_ref()).map_err(|e| {
		warn!("Rejected payment with invalid amount: {e}");
		ApiError::BadClientData {
			message: "Invalid amount".to_string(),
			details: Some(e.to_string()),
		}
	})?;

	Ok(CreatePaymentCommand {
		access_token: AccessToken::new(access_token),
		amount,
	})
}
