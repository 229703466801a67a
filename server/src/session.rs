use axum::http::{HeaderMap, header::COOKIE};
use base64::{Engine, prelude::BASE64_URL_SAFE_NO_PAD};
use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;
use types::{Error, Result, SESSION_COOKIE_NAME, Session, err};

type HmacSha256 = Hmac<Sha256>;

/// Signs and verifies session cookies.
///
/// A token is `{payload}.{signature}`: the session as base64url JSON and its
/// HMAC-SHA256, also base64url.
pub struct SessionKey {
    secret: SecretString,
}

impl SessionKey {
    pub fn new(secret: SecretString) -> Self {
        Self { secret }
    }

    fn mac(&self) -> Result<HmacSha256> {
        HmacSha256::new_from_slice(self.secret.expose_secret().as_bytes())
            .map_err(|_| err!("invalid session key"))
    }

    pub fn sign(&self, session: &Session) -> Result<String> {
        let payload = BASE64_URL_SAFE_NO_PAD.encode(serde_json::to_vec(session)?);

        let mut mac = self.mac()?;
        mac.update(payload.as_bytes());
        let signature = BASE64_URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());

        Ok(format!("{payload}.{signature}"))
    }

    pub fn verify(&self, token: &str) -> Result<Session> {
        let (payload, signature) = token
            .split_once('.')
            .ok_or_else(|| Error::unauthorized("invalid session token format"))?;

        let signature = BASE64_URL_SAFE_NO_PAD
            .decode(signature)
            .map_err(|_| Error::unauthorized("invalid session signature"))?;

        let mut mac = self.mac()?;
        mac.update(payload.as_bytes());
        mac.verify_slice(&signature)
            .map_err(|_| Error::unauthorized("invalid session signature"))?;

        let json = BASE64_URL_SAFE_NO_PAD
            .decode(payload)
            .map_err(|_| Error::unauthorized("invalid session payload"))?;

        serde_json::from_slice(&json).map_err(|_| Error::unauthorized("invalid session payload"))
    }
}

/// Find and verify the session cookie in a request's headers.
pub fn session_from_headers(headers: &HeaderMap, key: &SessionKey) -> Result<Session> {
    let prefix = format!("{SESSION_COOKIE_NAME}=");

    let token = headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .map(str::trim)
        .find_map(|cookie| cookie.strip_prefix(prefix.as_str()))
        .filter(|token| !token.is_empty())
        .ok_or_else(|| Error::unauthorized("not signed in"))?;

    key.verify(token)
}
