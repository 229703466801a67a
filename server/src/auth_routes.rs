use axum::{
    Form, Router,
    extract::State,
    http::{HeaderValue, StatusCode, header::SET_COOKIE},
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
};
use cookie::{Cookie, SameSite};
use serde::Deserialize;
use std::sync::Arc;
use types::{Error, Result, SESSION_COOKIE_NAME, Session};

use crate::{SessionKey, SipanduClient};

pub const MISSING_CREDENTIALS: &str = "Username and password are required.";
const SERVER_TROUBLE: &str = "Something went wrong on the server. Please try again later.";

#[derive(Clone)]
pub struct AuthState {
    pub client: SipanduClient,
    pub key: Arc<SessionKey>,
    pub cookie_secure: bool,
}

pub fn auth_router(state: AuthState) -> Router {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/logout", get(logout))
        .with_state(state)
}

#[derive(Deserialize)]
struct LoginForm {
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
}

async fn login(State(state): State<AuthState>, Form(form): Form<LoginForm>) -> Response {
    match login_inner(&state, form).await {
        Ok(token) => {
            let cookie = Cookie::build((SESSION_COOKIE_NAME, token))
                .path("/")
                .http_only(true)
                .same_site(SameSite::Lax)
                .secure(state.cookie_secure)
                .build();

            redirect_with_cookie("/?signed_in=true", cookie)
        }
        Err(error) => {
            let message = if error.status() == Error::INTERNAL {
                tracing::error!(?error, "login failed");
                SERVER_TROUBLE.to_string()
            } else {
                tracing::info!(%error, "login rejected");
                error.to_string()
            };

            Redirect::to(&login_error_path(&message)).into_response()
        }
    }
}

async fn login_inner(state: &AuthState, form: LoginForm) -> Result<String> {
    let username = form.username.trim();
    if username.is_empty() || form.password.is_empty() {
        return Err(Error::bad_request(MISSING_CREDENTIALS));
    }

    let access_token = state.client.login(username, &form.password).await?;
    tracing::info!(%username, "signed in");

    state.key.sign(&Session {
        username: username.to_string(),
        access_token,
    })
}

/// `/login?error=...`, with spaces as `%20` so the router reads them back.
fn login_error_path(message: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(message.as_bytes()).collect();
    format!("/login?error={}", encoded.replace('+', "%20"))
}

async fn logout() -> Response {
    let cookie = Cookie::build((SESSION_COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(cookie::time::Duration::ZERO)
        .build();

    redirect_with_cookie("/login", cookie)
}

fn redirect_with_cookie(location: &str, cookie: Cookie<'_>) -> Response {
    let value = match HeaderValue::from_str(&cookie.to_string()) {
        Ok(value) => value,
        Err(error) => {
            tracing::error!(?error, "session cookie is not a valid header value");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let mut response = Redirect::to(location).into_response();
    response.headers_mut().insert(SET_COOKIE, value);
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, header::LOCATION},
    };
    use serde_json::json;
    use std::time::Duration;
    use tower::ServiceExt;
    use url::Url;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path},
    };

    const SECRET: &str = "0123456789abcdef0123456789abcdef";

    fn router(server: &MockServer) -> Router {
        let base = Url::parse(&format!("{}/api/", server.uri())).unwrap();
        auth_router(AuthState {
            client: SipanduClient::new(base, Duration::from_secs(5)).unwrap(),
            key: Arc::new(SessionKey::new(SECRET.to_string().into())),
            cookie_secure: false,
        })
    }

    fn login_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/auth/login")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn header<'a>(response: &'a Response, name: axum::http::HeaderName) -> &'a str {
        response.headers().get(name).unwrap().to_str().unwrap()
    }

    #[tokio::test]
    async fn empty_password_is_rejected_without_remote_call() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let response = router(&server)
            .oneshot(login_request("username=admin&password="))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            header(&response, LOCATION),
            "/login?error=Username%20and%20password%20are%20required."
        );
        assert!(response.headers().get(SET_COOKIE).is_none());
    }

    #[tokio::test]
    async fn successful_login_sets_signed_cookie() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/users/login"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "access_token": "tok-1" })),
            )
            .mount(&server)
            .await;

        let response = router(&server)
            .oneshot(login_request("username=admin&password=secret"))
            .await
            .unwrap();

        assert_eq!(header(&response, LOCATION), "/?signed_in=true");

        let cookie = Cookie::parse(header(&response, SET_COOKIE).to_string()).unwrap();
        assert_eq!(cookie.name(), SESSION_COOKIE_NAME);
        assert_eq!(cookie.http_only(), Some(true));

        let key = SessionKey::new(SECRET.to_string().into());
        assert_eq!(key.verify(cookie.value()).unwrap().username, "admin");
    }

    #[tokio::test]
    async fn rejected_login_shows_remote_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/users/login"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({ "error": "Wrong password" })),
            )
            .mount(&server)
            .await;

        let response = router(&server)
            .oneshot(login_request("username=admin&password=nope"))
            .await
            .unwrap();

        assert_eq!(
            header(&response, LOCATION),
            "/login?error=Wrong%20password"
        );
    }

    #[tokio::test]
    async fn remote_outage_shows_generic_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/users/login"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let response = router(&server)
            .oneshot(login_request("username=admin&password=secret"))
            .await
            .unwrap();

        assert!(header(&response, LOCATION).starts_with("/login?error=Something%20went%20wrong"));
    }

    #[tokio::test]
    async fn logout_expires_cookie() {
        let server = MockServer::start().await;

        let response = router(&server)
            .oneshot(
                Request::builder()
                    .uri("/auth/logout")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(header(&response, LOCATION), "/login");
        let cookie = Cookie::parse(header(&response, SET_COOKIE).to_string()).unwrap();
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(cookie::time::Duration::ZERO));
    }

    #[test]
    fn error_path_escapes_reserved_characters() {
        assert_eq!(
            login_error_path("a&b=c d"),
            "/login?error=a%26b%3Dc%20d"
        );
    }
}
