use serde::{Deserialize, Serialize};

use crate::{Form, Named, PositionId, form::blank};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    #[serde(rename = "position_id")]
    pub id: PositionId,
    #[serde(rename = "position_name")]
    pub name: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Named for Position {
    type Id = PositionId;

    fn id(&self) -> PositionId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Also the JSON body the remote expects on create and update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionForm {
    #[serde(rename = "position_name")]
    pub name: String,
}

impl From<&Position> for PositionForm {
    fn from(position: &Position) -> Self {
        Self {
            name: position.name.clone(),
        }
    }
}

impl Form for PositionForm {
    fn missing_fields(&self) -> Vec<&'static str> {
        if blank(&self.name) {
            vec!["Position name"]
        } else {
            vec![]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_remote_record() {
        let position: Position = serde_json::from_value(json!({
            "position_id": 3,
            "position_name": "Supervisor",
            "created_at": "2024-11-02T08:00:00Z",
            "updated_at": "2024-11-02T08:00:00Z",
        }))
        .unwrap();

        assert_eq!(position.id, PositionId(3));
        assert_eq!(position.name, "Supervisor");
    }

    #[test]
    fn timestamps_are_optional() {
        let position: Position =
            serde_json::from_value(json!({ "position_id": 1, "position_name": "Guard" })).unwrap();
        assert_eq!(position.created_at, None);
    }

    #[test]
    fn form_body_uses_remote_field_name() {
        let form = PositionForm {
            name: "Guard".into(),
        };
        assert_eq!(
            serde_json::to_value(&form).unwrap(),
            json!({ "position_name": "Guard" })
        );
    }

    #[test]
    fn name_is_required() {
        let error = PositionForm::default().validate().unwrap_err();
        assert_eq!(error.to_string(), "Position name is required.");
    }
}
