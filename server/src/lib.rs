mod auth_routes;
mod config;
mod session;
pub mod sipandu;

use axum::Router;
use axum::http::HeaderMap;
use dioxus::fullstack::FullstackContext;
use std::sync::{Arc, OnceLock};
use tracing_subscriber::EnvFilter;
use types::{Error, Result, Session, err};

use crate::auth_routes::{AuthState, auth_router};
pub use crate::config::Config;
pub use crate::session::{SessionKey, session_from_headers};
pub use crate::sipandu::{AuthedClient, Resource, SipanduClient};

struct ServerState {
    client: SipanduClient,
    key: Arc<SessionKey>,
}

static STATE: OnceLock<ServerState> = OnceLock::new();

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Load configuration and build the `/auth` routes. Call once at start-up.
pub fn init() -> Result<Router> {
    let config = Config::load()?;
    tracing::info!(api_url = %config.api_url, "using remote API");

    let client = SipanduClient::new(config.api_url.clone(), config.request_timeout)?;
    let key = Arc::new(SessionKey::new(config.session_secret.clone()));

    STATE
        .set(ServerState {
            client: client.clone(),
            key: key.clone(),
        })
        .map_err(|_| err!("server initialized twice"))?;

    Ok(auth_router(AuthState {
        client,
        key,
        cookie_secure: config.cookie_secure,
    }))
}

fn state() -> Result<&'static ServerState> {
    STATE.get().ok_or_else(|| err!("server is not initialized"))
}

/// Extract the user session from the request cookie.
pub async fn get_session_from_cookie() -> Result<Session> {
    let headers: HeaderMap = FullstackContext::extract().await?;
    session_from_headers(&headers, &state()?.key)
}

/// A signed-in user's handle on the remote API.
pub struct Remote {
    client: &'static SipanduClient,
    session: Session,
}

impl Remote {
    pub fn api(&self) -> AuthedClient<'_> {
        self.client.as_user(&self.session)
    }

    pub fn username(&self) -> &str {
        &self.session.username
    }
}

/// Require a signed-in session for the current request.
pub async fn require_session() -> Result<Remote> {
    let session = get_session_from_cookie().await.map_err(|error| {
        tracing::debug!(?error, "rejecting request without a valid session");
        Error::unauthorized("please sign in")
    })?;

    Ok(Remote {
        client: &state()?.client,
        session,
    })
}
