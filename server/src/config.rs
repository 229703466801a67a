use config::{ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::{env, time::Duration};
use types::{Result, err};
use url::Url;

pub const DEFAULT_API_URL: &str = "https://sipandu.sinarjernihsuksesindo.biz.id/api/";

const MIN_SECRET_LEN: usize = 32;

#[derive(Clone)]
pub struct Config {
    /// Base of the remote REST API, always ending in `/`.
    pub api_url: Url,
    pub session_secret: SecretString,
    pub cookie_secure: bool,
    pub request_timeout: Duration,
}

#[derive(Deserialize)]
struct RawConfig {
    #[serde(default = "default_api_url")]
    api_url: String,
    session_secret: Option<String>,
    #[serde(default)]
    cookie_secure: bool,
    #[serde(default = "default_timeout_secs")]
    request_timeout_secs: u64,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Config {
    /// `sipandu.toml` (or `$SIPANDU_CONFIG`) overlaid with `SIPANDU_*` variables.
    pub fn load() -> Result<Self> {
        let path = env::var("SIPANDU_CONFIG").unwrap_or_else(|_| "sipandu.toml".into());

        Self::from_builder(
            config::Config::builder()
                .add_source(File::new(&path, FileFormat::Toml).required(false))
                .add_source(Environment::with_prefix("SIPANDU").try_parsing(true)),
        )
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        let raw: RawConfig = builder.build()?.try_deserialize()?;

        let mut api_url = raw.api_url;
        if !api_url.ends_with('/') {
            api_url.push('/');
        }
        let api_url = Url::parse(&api_url)?;

        let session_secret: SecretString = raw
            .session_secret
            .ok_or_else(|| err!("missing configuration: session_secret"))?
            .into();
        if session_secret.expose_secret().len() < MIN_SECRET_LEN {
            return Err(err!(
                "session_secret must be at least {MIN_SECRET_LEN} bytes"
            ));
        }

        Ok(Self {
            api_url,
            session_secret,
            cookie_secure: raw.cookie_secure,
            request_timeout: Duration::from_secs(raw.request_timeout_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "0123456789abcdef0123456789abcdef";

    fn from_toml(toml: &str) -> Result<Config> {
        Config::from_builder(
            config::Config::builder().add_source(File::from_str(toml, FileFormat::Toml)),
        )
    }

    #[test]
    fn defaults_apply() {
        let config = from_toml(&format!("session_secret = \"{SECRET}\"")).unwrap();

        assert_eq!(config.api_url.as_str(), DEFAULT_API_URL);
        assert!(!config.cookie_secure);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn api_url_gets_trailing_slash() {
        let config = from_toml(&format!(
            "api_url = \"http://localhost:8000/api\"\nsession_secret = \"{SECRET}\""
        ))
        .unwrap();

        assert_eq!(
            config.api_url.join("shifts/").unwrap().as_str(),
            "http://localhost:8000/api/shifts/"
        );
    }

    #[test]
    fn secret_is_required() {
        let error = from_toml("cookie_secure = true").err().unwrap();
        assert!(error.to_string().contains("session_secret"));
    }

    #[test]
    fn short_secret_is_rejected() {
        assert!(from_toml("session_secret = \"hunter2\"").is_err());
    }
}
