use std::env;

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub port: i32,
}

impl EnvConfig {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        EnvConfig {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
        }
    }
}
