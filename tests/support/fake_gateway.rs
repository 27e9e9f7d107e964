use std::sync::{Arc, Mutex};
use std::time::Duration;

use actix_web::dev::ServerHandle;
use actix_web::http::StatusCode;
use actix_web::http::header::{AUTHORIZATION, CONTENT_TYPE, HeaderName};
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use moncash_backend::domain::credentials::Credentials;
use moncash_backend::infrastructure::gateway::moncash_gateway::MonCashGateway;
use serde_json::Value;

pub const API_PATH: &str = "/Api";
pub const REDIRECT_PATH: &str = "/Moncash-middleware/Payment/Redirect";
pub const CLIENT_ID: &str = "test-client";
pub const CLIENT_SECRET: &str = "test-secret";

/// Canned answer for one MonCash endpoint.
#[derive(Clone)]
pub struct Stub {
	pub status: u16,
	pub body:   String,
	pub delay:  Option<Duration>,
}

impl Stub {
	pub fn json(status: u16, body: Value) -> Self {
		Self {
			status,
			body:  body.to_string(),
			delay: None,
		}
	}

	pub fn raw(status: u16, body: &str) -> Self {
		Self {
			status,
			body:  body.to_string(),
			delay: None,
		}
	}

	pub fn delayed(mut self, delay: Duration) -> Self {
		self.delay = Some(delay);
		self
	}
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
	pub path:          String,
	pub authorization: Option<String>,
	pub content_type:  Option<String>,
	pub body:          String,
}

struct FakeGatewayState {
	token:    Stub,
	payment:  Stub,
	recorded: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// MonCash stand-in served from an ephemeral local port.
pub struct FakeGateway {
	pub base_url: String,
	recorded:     Arc<Mutex<Vec<RecordedRequest>>>,
	handle:       ServerHandle,
}

impl FakeGateway {
	pub async fn start(token: Stub, payment: Stub) -> Self {
		let recorded = Arc::new(Mutex::new(Vec::new()));
		let state = web::Data::new(FakeGatewayState {
			token,
			payment,
			recorded: recorded.clone(),
		});

		let server = HttpServer::new(move || {
			App::new()
				.app_data(state.clone())
				.route(
					&format!("{API_PATH}/oauth/token"),
					web::post().to(token_endpoint),
				)
				.route(
					&format!("{API_PATH}/v1/CreatePayment"),
					web::post().to(create_payment_endpoint),
				)
		})
		.workers(1)
		.bind(("127.0.0.1", 0))
		.expect("Failed to bind fake gateway");

		let port = server.addrs()[0].port();
		let server = server.run();
		let handle = server.handle();
		actix_web::rt::spawn(server);

		Self {
			base_url: format!("http://127.0.0.1:{port}"),
			recorded,
			handle,
		}
	}

	pub fn api_url(&self) -> String {
		format!("{}{API_PATH}", self.base_url)
	}

	pub fn redirect_url(&self) -> String {
		format!("{}{REDIRECT_PATH}", self.base_url)
	}

	pub fn requests(&self) -> Vec<RecordedRequest> {
		self.recorded.lock().unwrap().clone()
	}

	pub fn gateway(&self) -> MonCashGateway {
		self.gateway_with_timeout(Duration::from_secs(5))
	}

	pub fn gateway_with_timeout(&self, timeout: Duration) -> MonCashGateway {
		MonCashGateway::new(
			reqwest::Client::new(),
			Credentials::new(CLIENT_ID, CLIENT_SECRET),
			self.api_url(),
			self.redirect_url(),
			timeout,
		)
	}

	pub async fn stop(self) {
		self.handle.stop(false).await;
	}
}

/// Gateway pointed at a port nothing listens on.
pub fn unreachable_gateway() -> MonCashGateway {
	MonCashGateway::new(
		reqwest::Client::new(),
		Credentials::new(CLIENT_ID, CLIENT_SECRET),
		format!("http://127.0.0.1:1{API_PATH}"),
		format!("http://127.0.0.1:1{REDIRECT_PATH}"),
		Duration::from_secs(5),
	)
}

async fn token_endpoint(
	req: HttpRequest,
	body: String,
	state: web::Data<FakeGatewayState>,
) -> HttpResponse {
	answer(&req, body, &state, &state.token).await
}

async fn create_payment_endpoint(
	req: HttpRequest,
	body: String,
	state: web::Data<FakeGatewayState>,
) -> HttpResponse {
	answer(&req, body, &state, &state.payment).await
}

async fn answer(
	req: &HttpRequest,
	body: String,
	state: &FakeGatewayState,
	stub: &Stub,
) -> HttpResponse {
	let header = |name: HeaderName| {
		req.headers()
			.get(name)
			.and_then(|value| value.to_str().ok())
			.map(str::to_string)
	};

	state.recorded.lock().unwrap().push(RecordedRequest {
		path:          req.path().to_string(),
		authorization: header(AUTHORIZATION),
		content_type:  header(CONTENT_TYPE),
		body,
	});

	if let Some(delay) = stub.delay {
		actix_web::rt::time::sleep(delay).await;
	}

	HttpResponse::build(StatusCode::from_u16(stub.status).unwrap())
		.content_type("application/json")
		.body(stub.body.clone())
}
