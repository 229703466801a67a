use secrecy::SecretString;
use serde::{Deserialize, Serialize};

pub const SESSION_COOKIE_NAME: &str = "sipandu_session";

/// What the session cookie carries. Never sent to the browser as data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub username: String,
    #[serde(with = "secret_string")]
    pub access_token: SecretString,
}

impl Session {
    pub fn current_user(&self) -> CurrentUser {
        CurrentUser {
            username: self.username.clone(),
        }
    }
}

/// The signed-in user as the browser sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub username: String,
}

impl CurrentUser {
    pub fn initial(&self) -> String {
        self.username
            .chars()
            .next()
            .unwrap_or('?')
            .to_uppercase()
            .to_string()
    }
}

mod secret_string {
    use secrecy::SecretString;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use secrecy::ExposeSecret;
        serializer.serialize_str(secret.expose_secret())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(s.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn token_survives_serialization() {
        let session = Session {
            username: "admin".into(),
            access_token: "abc.def".to_string().into(),
        };
        let json = serde_json::to_string(&session).unwrap();
        let back: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(back.access_token.expose_secret(), "abc.def");
    }

    #[test]
    fn debug_hides_token() {
        let session = Session {
            username: "admin".into(),
            access_token: "abc.def".to_string().into(),
        };
        assert!(!format!("{session:?}").contains("abc.def"));
    }

    #[test]
    fn initial_is_uppercase() {
        let user = CurrentUser {
            username: "budi".into(),
        };
        assert_eq!(user.initial(), "B");
    }
}
