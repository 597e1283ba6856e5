use secrecy::SecretString;
use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub mongo_conn_string: String,
    pub mongo_db_name: String,
    pub groq_api_key: SecretString,
    pub web_server_host: String,
    pub web_server_port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            mongo_conn_string: env::var("MONGO_CONN_STRING")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            mongo_db_name: env::var("MONGO_DB_NAME")
                .unwrap_or_else(|_| "wiki-quiz-local".to_string()),
            groq_api_key: SecretString::from(env::var("GROQ_API_KEY").unwrap_or_default()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
        }
    }

    /// Validate that required configuration is set
    /// Panics if the model provider key is missing; without it every
    /// generation request would fail
    pub fn validate_for_startup(&self) {
        use secrecy::ExposeSecret;

        if self.groq_api_key.expose_secret().trim().is_empty() {
            panic!(
                "FATAL: GROQ_API_KEY is not set! Set the GROQ_API_KEY environment variable to a valid Groq API key."
            );
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            mongo_conn_string: "mongodb://localhost:27017".to_string(),
            mongo_db_name: "wiki-quiz-test".to_string(),
            groq_api_key: SecretString::from("test_groq_api_key".to_string()),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env_with_defaults() {
        let config = Config::from_env();

        // Should use env vars if set, or fall back to defaults
        assert!(!config.mongo_conn_string.is_empty());
        assert!(!config.mongo_db_name.is_empty());
        assert!(!config.web_server_host.is_empty());
    }

    #[test]
    fn test_test_config() {
        let config = Config::test_config();

        assert_eq!(config.mongo_conn_string, "mongodb://localhost:27017");
        assert_eq!(config.mongo_db_name, "wiki-quiz-test");
        assert_eq!(config.web_server_port, 8080);
    }

    #[test]
    fn test_startup_validation_accepts_test_config() {
        Config::test_config().validate_for_startup();
    }

    #[test]
    #[should_panic(expected = "GROQ_API_KEY")]
    fn test_startup_validation_rejects_missing_key() {
        let mut config = Config::test_config();
        config.groq_api_key = SecretString::from("".to_string());
        config.validate_for_startup();
    }
}
