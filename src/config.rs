use std::env;

use crate::error::{EnvVarError, Error, Result};

pub const DEFAULT_BASE_URL: &str = "https://api.football-data.org/v2/";
pub const TOKEN_VAR: &str = "FOOTBALL_DATA_API_TOKEN";
pub const BASE_URL_VAR: &str = "FOOTBALL_DATA_BASE_URL";

/// Where to send requests and which token to send with them. Fixed for the
/// lifetime of a client.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    token: String,
}

impl ClientConfig {
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(Error::Configuration("auth token is empty".into()));
        }

        Ok(Self {
            base_url: DEFAULT_BASE_URL.into(),
            token,
        })
    }

    // requires FOOTBALL_DATA_API_TOKEN env var
    // can use dotenv
    pub fn from_env() -> Result<Self> {
        let token = env::var(TOKEN_VAR).map_err(|e| EnvVarError::new(TOKEN_VAR, e))?;
        let config = Self::new(token)?;

        match env::var(BASE_URL_VAR) {
            Ok(url) => config.with_base_url(url),
            Err(_) => Ok(config),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Result<Self> {
        let mut base_url = base_url.into();
        if base_url.trim().is_empty() {
            return Err(Error::Configuration("base url is empty".into()));
        }
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        self.base_url = base_url;
        Ok(self)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

// keep the token out of logs
impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("token", &"***")
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_empty_token_is_rejected() {
        assert!(matches!(ClientConfig::new(""), Err(Error::Configuration(_))));
        assert!(matches!(ClientConfig::new("  \t"), Err(Error::Configuration(_))));
    }

    #[test]
    fn test_default_base_url() {
        let config = ClientConfig::new("asdf1234").unwrap();
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.token(), "asdf1234");
        assert_eq!(
            config.url("teams/66"),
            "https://api.football-data.org/v2/teams/66"
        );
    }

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let config = ClientConfig::new("asdf1234")
            .unwrap()
            .with_base_url("http://localhost:1234/v2")
            .unwrap();
        assert_eq!(config.url("teams/66"), "http://localhost:1234/v2/teams/66");

        assert!(matches!(
            ClientConfig::new("asdf1234").unwrap().with_base_url(""),
            Err(Error::Configuration(_))
        ));
    }

    #[test]
    fn test_debug_hides_token() {
        let config = ClientConfig::new("asdf1234").unwrap();
        assert!(!format!("{config:?}").contains("asdf1234"));
    }

    #[test]
    fn test_from_env() {
        dotenv::from_filename(".env.example").ok();
        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.token(), "asdf1234");
    }
}
