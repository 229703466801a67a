use reqwest::{
    Client, Method, RequestBuilder, StatusCode, Url,
    multipart::{Form as Multipart, Part},
};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::{fmt::Display, time::Duration};
use types::{
    EmployeeId, Error, LocationId, PositionId, Result, Session, ShiftId,
    employee::{Employee, EmployeeForm, Photo},
    err,
    location::Location,
    position::Position,
    shift::Shift,
};

/// A collection the remote API exposes at `{base}{PATH}` and `{base}{PATH}{id}`.
pub trait Resource: DeserializeOwned {
    const PATH: &'static str;
    type Id: Display;
}

impl Resource for Employee {
    const PATH: &'static str = "employees/";
    type Id = EmployeeId;
}

impl Resource for Position {
    const PATH: &'static str = "positions/";
    type Id = PositionId;
}

impl Resource for Shift {
    const PATH: &'static str = "shifts/";
    type Id = ShiftId;
}

impl Resource for Location {
    const PATH: &'static str = "customers/";
    type Id = LocationId;
}

trait ReqwestExt {
    async fn try_send<T: DeserializeOwned>(self) -> Result<T>;

    /// Send, check the status and ignore whatever body comes back.
    async fn try_send_empty(self) -> Result<()>;
}

async fn checked(request: RequestBuilder) -> Result<reqwest::Response> {
    let response = request.send().await?;

    match response.status() {
        StatusCode::UNAUTHORIZED => Err(Error::unauthorized(
            "your session has expired, please sign in again",
        )),
        status if status.is_client_error() || status.is_server_error() => {
            tracing::warn!(%status, url = %response.url(), "remote request failed");
            Err(err!("remote returned {status}"))
        }
        _ => Ok(response),
    }
}

impl ReqwestExt for RequestBuilder {
    async fn try_send<T: DeserializeOwned>(self) -> Result<T> {
        let response = checked(self).await?;
        let body = response.bytes().await?;

        match serde_json::from_slice(&body) {
            Ok(r) => Ok(r),
            Err(error) => {
                // NOTE: Bodies may hold personal data, so only their size is logged.
                tracing::debug!(?error, len = body.len(), "failed to parse response");
                Err(error.into())
            }
        }
    }

    async fn try_send_empty(self) -> Result<()> {
        checked(self).await?;
        Ok(())
    }
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Default, Deserialize)]
struct LoginResponse {
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Clone)]
pub struct SipanduClient {
    client: Client,
    base_url: Url,
}

impl SipanduClient {
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            base_url,
        })
    }

    fn url(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    /// Exchange credentials for the remote's access token.
    pub async fn login(&self, username: &str, password: &str) -> Result<SecretString> {
        let response = self
            .client
            .post(self.url("users/login")?)
            .json(&LoginRequest { username, password })
            .send()
            .await?;

        let status = response.status();
        let body: LoginResponse = response.json().await.unwrap_or_default();

        if !status.is_success() {
            if status.is_server_error() {
                return Err(err!("login failed: remote returned {status}"));
            }
            return Err(Error::unauthorized(
                body.error
                    .unwrap_or_else(|| "Invalid username or password.".to_string()),
            ));
        }

        body.access_token
            .map(SecretString::from)
            .ok_or_else(|| err!("login response has no access token"))
    }

    /// Calls made on behalf of a signed-in user.
    pub fn as_user<'a>(&'a self, session: &'a Session) -> AuthedClient<'a> {
        AuthedClient {
            inner: self,
            session,
        }
    }
}

pub struct AuthedClient<'a> {
    inner: &'a SipanduClient,
    session: &'a Session,
}

impl AuthedClient<'_> {
    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let url = self.inner.url(path)?;
        tracing::debug!(%method, %url, "remote request");

        Ok(self
            .inner
            .client
            .request(method, url)
            .bearer_auth(self.session.access_token.expose_secret()))
    }

    fn item_path<R: Resource>(id: &R::Id) -> String {
        format!("{}{id}", R::PATH)
    }

    pub async fn list<R: Resource>(&self) -> Result<Vec<R>> {
        self.request(Method::GET, R::PATH)?.try_send().await
    }

    pub async fn get<R: Resource>(&self, id: R::Id) -> Result<R> {
        self.request(Method::GET, &Self::item_path::<R>(&id))?
            .try_send()
            .await
    }

    pub async fn create<R: Resource>(&self, body: &impl Serialize) -> Result<()> {
        self.request(Method::POST, R::PATH)?
            .json(body)
            .try_send_empty()
            .await?;
        tracing::info!(user = %self.session.username, path = R::PATH, "created record");
        Ok(())
    }

    pub async fn update<R: Resource>(&self, id: R::Id, body: &impl Serialize) -> Result<()> {
        self.request(Method::PUT, &Self::item_path::<R>(&id))?
            .json(body)
            .try_send_empty()
            .await?;
        tracing::info!(user = %self.session.username, path = R::PATH, %id, "updated record");
        Ok(())
    }

    pub async fn delete<R: Resource>(&self, id: R::Id) -> Result<()> {
        self.request(Method::DELETE, &Self::item_path::<R>(&id))?
            .try_send_empty()
            .await?;
        tracing::info!(user = %self.session.username, path = R::PATH, %id, "deleted record");
        Ok(())
    }

    /// Employees are written as multipart forms so a photo can ride along.
    pub async fn create_employee(&self, form: &EmployeeForm, photo: Option<Photo>) -> Result<()> {
        self.request(Method::POST, Employee::PATH)?
            .multipart(employee_body(form, photo)?)
            .try_send_empty()
            .await?;
        tracing::info!(user = %self.session.username, "created employee");
        Ok(())
    }

    pub async fn update_employee(
        &self,
        id: EmployeeId,
        form: &EmployeeForm,
        photo: Option<Photo>,
    ) -> Result<()> {
        self.request(Method::PUT, &Self::item_path::<Employee>(&id))?
            .multipart(employee_body(form, photo)?)
            .try_send_empty()
            .await?;
        tracing::info!(user = %self.session.username, %id, "updated employee");
        Ok(())
    }
}

fn employee_body(form: &EmployeeForm, photo: Option<Photo>) -> Result<Multipart> {
    let mut body = form
        .fields()
        .into_iter()
        .fold(Multipart::new(), |body, (name, value)| body.text(name, value));

    if let Some(photo) = photo {
        let mut part = Part::bytes(photo.bytes).file_name(photo.file_name);
        if let Some(content_type) = photo.content_type {
            part = part.mime_str(&content_type)?;
        }
        body = body.part("photo", part);
    }

    Ok(body)
}
