use anyhow::Result;
use dotenvy::dotenv;
use serde::Deserialize;
use std::env;

#[derive(Deserialize, Clone, Debug)]
pub struct Config {
    pub server: ServerConfig,
    pub app_name: String,
    pub service_name: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let host = env::var("SIMPLE_BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("SIMPLE_BACKEND_PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse()?;

        // Resolved once here; handlers never consult the environment.
        let app_name = env::var("APP_NAME").unwrap_or_else(|_| "Simple Backend".to_string());

        Ok(Self {
            server: ServerConfig { host, port },
            app_name,
            service_name: "simple-backend".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_name_defaults_then_honors_env() {
        env::remove_var("APP_NAME");
        let config = Config::from_env().expect("Failed to load config");
        assert_eq!(config.app_name, "Simple Backend");

        env::set_var("APP_NAME", "Acme Backend");
        let config = Config::from_env().expect("Failed to load config");
        assert_eq!(config.app_name, "Acme Backend");
        env::remove_var("APP_NAME");
    }
}
