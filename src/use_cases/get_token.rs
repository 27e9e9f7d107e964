use crate::domain::access_token::AccessToken;
use crate::domain::gateway::{GatewayError, PaymentGateway};

#[derive(Clone)]
pub struct GetTokenUseCase<G: PaymentGateway> {
	gateway: G,
}

impl<G: PaymentGateway> GetTokenUseCase<G> {
	pub fn new(gateway: G) -> Self {
		Self { gateway }
	}

	pub async fn execute(&self) -> Result<AccessToken, GatewayError> {
		self.gateway.request_token().await
	}
}

#[cfg(test)]
mod tests {
	use async_trait::async_trait;
	use serde_json::{Value, json};

	use super::*;
	use crate::domain::payment::PaymentRequest;

	struct TokenOnlyGateway {
		answer: fn() -> Result<AccessToken, GatewayError>,
	}

	#[async_trait]
	impl PaymentGateway for TokenOnlyGateway {
		async fn request_token(&self) -> Result<AccessToken, GatewayError> {
			(self.answer)()
		}

		async fn create_payment(
			&self,
			_access_token: &AccessToken,
			_request: &PaymentRequest,
		) -> Result<Value, GatewayError> {
			unreachable!("token use case never creates payments")
		}

		fn payment_redirect_url(&self, payment_token: &str) -> String {
			format!("http://gateway/Redirect?token={payment_token}")
		}
	}

	#[tokio::test]
	async fn test_execute_returns_token() {
		let use_case = GetTokenUseCase::new(TokenOnlyGateway {
			answer: || Ok(AccessToken::new("X")),
		});

		let token = use_case.execute().await.unwrap();

		assert_eq!(token.as_str(), "X");
	}

	#[tokio::test]
	async fn test_execute_propagates_rejection() {
		let use_case = GetTokenUseCase::new(TokenOnlyGateway {
			answer: || {
				Err(GatewayError::Rejected {
					status: 401,
					body:   json!({ "message": "invalid_client" }),
				})
			},
		});

		let error = use_case.execute().await.unwrap_err();

		assert!(matches!(error, GatewayError::Rejected { status: 401, .. }));
	}
}
