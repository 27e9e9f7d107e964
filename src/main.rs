use std::sync::Arc;

use moncash_backend::run;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
	dotenvy::dotenv().ok();
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
		.init();

	let config = Arc::new(
		moncash_backend::infrastructure::config::settings::Config::load()
			.expect("Failed to load configuration"),
	);
	run(config).await
}
