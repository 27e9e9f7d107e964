use std::sync::Arc;
use std::time::Duration;

use actix_web::{App, HttpServer, middleware, web};
use log::info;
use reqwest::Client;

use crate::adapters::web::cors::build_cors;
use crate::adapters::web::errors::json_error_handler;
use crate::adapters::web::health_handler::health;
use crate::adapters::web::payments_handler::create_payment;
use crate::adapters::web::token_handler::get_token;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::gateway::moncash_gateway::MonCashGateway;
use crate::use_cases::create_payment::CreatePaymentUseCase;
use crate::use_cases::get_token::GetTokenUseCase;

pub mod domain {
	pub mod access_token;
	pub mod credentials;
	pub mod gateway;
	pub mod order_id;
	pub mod payment;
}

pub mod use_cases {
	pub mod create_payment;
	pub mod dto;
	pub mod get_token;
}

pub mod adapters {
	pub mod web {
		pub mod cors;
		pub mod errors;
		pub mod health_handler;
		pub mod payments_handler;
		pub mod schema;
		pub mod token_handler;
	}
}

pub mod infrastructure {
	pub mod config {
		pub mod settings;
	}
	pub mod gateway {
		pub mod moncash_gateway;
	}
}

pub async fn run(config: Arc<Config>) -> std::io::Result<()> {
	let http_client = Client::builder()
		.connect_timeout(config.upstream_timeout())
		.build()
		.map_err(std::io::Error::other)?;

	let gateway = MonCashGateway::new(
		http_client,
		config.credentials(),
		config.api_url(),
		config.redirect_url(),
		config.upstream_timeout(),
	);

	let get_token_use_case = web::Data::new(GetTokenUseCase::new(gateway.clone()));
	let create_payment_use_case =
		web::Data::new(CreatePaymentUseCase::new(gateway));
	let allowed_origins = config.allowed_origins();

	info!("Forwarding to MonCash API at {}", config.api_url());
	if allowed_origins.is_empty() {
		info!("CORS: allowing any origin");
	} else {
		info!("CORS: allowing origins {allowed_origins:?}");
	}
	info!("Starting Actix-Web server on 0.0.0.0:{}...", config.port);

	HttpServer::new(move || {
		App::new()
			.wrap(build_cors(&allowed_origins))
			.wrap(middleware::Logger::default())
			.app_data(web::JsonConfig::default().error_handler(json_error_handler))
			.app_data(get_token_use_case.clone())
			.app_data(create_payment_use_case.clone())
			.service(health)
			.service(get_token)
			.service(create_payment)
	})
	.keep_alive(Duration::from_secs(config.server_keepalive))
	.bind(("0.0.0.0", config.port))?
	.run()
	.await
}
