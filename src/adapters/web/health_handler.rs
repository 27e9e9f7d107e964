use actix_web::{HttpResponse, Responder, get};

pub const HEALTH_MESSAGE: &str = "MonCash Backend is running";

#[get("/")]
pub async fn health() -> impl Responder {
	HttpResponse::Ok()
		.content_type("text/plain; charset=utf-8")
		.body(HEALTH_MESSAGE)
}
