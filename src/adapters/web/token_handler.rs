use actix_web::{HttpResponse, post, web};
use log::info;

use crate::adapters::web::errors::ApiError;
use crate::adapters::web::schema::TokenResponse;
use crate::infrastructure::gateway::moncash_gateway::MonCashGateway;
use crate::use_cases::get_token::GetTokenUseCase;

#[post("/api/get-token")]
pub async fn get_token(
	get_token_use_case: web::Data<GetTokenUseCase<MonCashGateway>>,
) -> Result<HttpResponse, ApiError> {
	let access_token = get_token_use_case
		.execute()
		.await
		.map_err(ApiError::from_token_error)?;

	info!("Access token issued");
	Ok(HttpResponse::Ok().json(TokenResponse {
		access_token: access_token.into_inner(),
	}))
}
