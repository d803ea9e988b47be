/// Verify service configuration loaded from environment variables.
#[derive(Debug)]
pub struct VerifyConfig {
    /// PostgreSQL connection URL (outbox table).
    pub database_url: String,
    /// Redis connection URL (claim-once store).
    pub redis_url: String,
    /// Public site origin used in verification links (e.g. "https://doorstep.example").
    pub public_base_url: String,
    /// TCP port to listen on (default 3114). Env var: `VERIFY_PORT`.
    pub verify_port: u16,
}

impl VerifyConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            redis_url: std::env::var("REDIS_URL").expect("REDIS_URL"),
            public_base_url: std::env::var("PUBLIC_BASE_URL").expect("PUBLIC_BASE_URL"),
            verify_port: std::env::var("VERIFY_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3114),
        }
    }
}
