use actix_cors::Cors;

const CORS_MAX_AGE_SECS: usize = 3600;

/// Allows every origin when none are configured, otherwise only the listed
/// ones.
pub fn build_cors(allowed_origins: &[String]) -> Cors {
	let cors = if allowed_origins.is_empty() {
		Cors::default().allow_any_origin()
	} else {
		allowed_origins
			.iter()
			.fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
	};

	cors.allow_any_method()
		.allow_any_header()
		.max_age(CORS_MAX_AGE_SECS)
}
