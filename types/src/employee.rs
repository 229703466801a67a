use serde::{Deserialize, Serialize};

use crate::{EmployeeId, Form, LocationId, PositionId, ShiftId, ValidationError, form::blank};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    #[serde(rename = "employees_nip")]
    pub nip: String,
    #[serde(rename = "employees_name")]
    pub name: String,
    #[serde(rename = "employees_email")]
    pub email: String,
    pub position_id: PositionId,
    pub shift_id: ShiftId,
    /// Placement site.
    #[serde(rename = "id_area_patroli", default)]
    pub location_id: Option<LocationId>,
    #[serde(default)]
    pub photo: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeForm {
    pub nip: String,
    pub name: String,
    pub email: String,
    /// Left empty to keep the current password.
    pub password: String,
    pub position_id: PositionId,
    pub shift_id: ShiftId,
    pub location_id: LocationId,
}

impl EmployeeForm {
    /// Text parts of the multipart body, named the way the remote names them.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("employees_nip", self.nip.trim().to_string()),
            ("employees_name", self.name.trim().to_string()),
            ("employees_email", self.email.trim().to_string()),
        ];

        if !self.password.is_empty() {
            fields.push(("password", self.password.clone()));
        }

        fields.extend([
            ("position_id", self.position_id.to_string()),
            ("shift_id", self.shift_id.to_string()),
            ("id_area_patroli", self.location_id.to_string()),
        ]);

        fields
    }
}

impl From<&Employee> for EmployeeForm {
    fn from(employee: &Employee) -> Self {
        Self {
            nip: employee.nip.clone(),
            name: employee.name.clone(),
            email: employee.email.clone(),
            password: String::new(),
            position_id: employee.position_id,
            shift_id: employee.shift_id,
            location_id: employee.location_id.unwrap_or_default(),
        }
    }
}

impl Form for EmployeeForm {
    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing: Vec<_> = [
            ("NIP", &self.nip),
            ("Name", &self.name),
            ("Email", &self.email),
        ]
        .into_iter()
        .filter(|(_, value)| blank(value))
        .map(|(label, _)| label)
        .collect();

        for (label, set) in [
            ("Position", self.position_id.is_set()),
            ("Shift", self.shift_id.is_set()),
            ("Placement", self.location_id.is_set()),
        ] {
            if !set {
                missing.push(label);
            }
        }

        missing
    }

    fn check_values(&self) -> Result<(), ValidationError> {
        let email = self.email.trim();
        match email.split_once('@') {
            Some((user, domain)) if !user.is_empty() && !domain.is_empty() => Ok(()),
            _ => Err(ValidationError::Invalid {
                field: "Email",
                reason: "must be a valid email address",
            }),
        }
    }
}

/// An uploaded profile photo.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for Photo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Photo")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn filled_form() -> EmployeeForm {
        EmployeeForm {
            nip: "19870101".into(),
            name: "Budi Santoso".into(),
            email: "budi@example.com".into(),
            password: String::new(),
            position_id: PositionId(1),
            shift_id: ShiftId(2),
            location_id: LocationId(3),
        }
    }

    #[test]
    fn parses_remote_record_without_placement() {
        let employee: Employee = serde_json::from_value(json!({
            "id": 5,
            "employees_nip": "123",
            "employees_name": "Siti",
            "employees_email": "siti@example.com",
            "position_id": 1,
            "shift_id": 2,
            "id_area_patroli": null,
            "photo": null,
        }))
        .unwrap();

        assert_eq!(employee.id, EmployeeId(5));
        assert_eq!(employee.location_id, None);
        assert_eq!(EmployeeForm::from(&employee).location_id, LocationId(0));
    }

    #[test]
    fn unselected_references_are_missing() {
        let form = EmployeeForm {
            position_id: PositionId(0),
            location_id: LocationId(0),
            ..filled_form()
        };
        assert_eq!(form.missing_fields(), vec!["Position", "Placement"]);
    }

    #[test]
    fn password_is_optional() {
        assert!(filled_form().validate().is_ok());
        assert!(!filled_form().fields().iter().any(|(name, _)| *name == "password"));
    }

    #[test]
    fn password_is_sent_when_set() {
        let form = EmployeeForm {
            password: "hunter2".into(),
            ..filled_form()
        };
        assert!(form.fields().contains(&("password", "hunter2".to_string())));
    }

    #[test]
    fn fields_use_remote_names() {
        let fields = filled_form().fields();
        assert!(fields.contains(&("employees_nip", "19870101".to_string())));
        assert!(fields.contains(&("id_area_patroli", "3".to_string())));
    }

    #[test]
    fn email_needs_an_at_sign() {
        let form = EmployeeForm {
            email: "budi".into(),
            ..filled_form()
        };
        assert_eq!(
            form.validate().unwrap_err().to_string(),
            "Email must be a valid email address."
        );
    }
}
