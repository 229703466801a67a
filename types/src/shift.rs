use jiff::civil::Time;
use serde::{Deserialize, Serialize};

use crate::{Form, Named, ShiftId, ValidationError, form::blank};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    #[serde(rename = "shift_id")]
    pub id: ShiftId,
    #[serde(rename = "shift_name")]
    pub name: String,
    pub time_in: String,
    pub time_out: String,
}

impl Shift {
    /// Working hours as `HH:MM - HH:MM`.
    pub fn hours(&self) -> String {
        format!("{} - {}", short_time(&self.time_in), short_time(&self.time_out))
    }
}

impl Named for Shift {
    type Id = ShiftId;

    fn id(&self) -> ShiftId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// A time of day written as `HH:MM:SS` or `HH:MM`, nothing else.
pub fn parse_time(value: &str) -> Option<Time> {
    let value = value.trim();
    Time::strptime("%H:%M:%S", value)
        .or_else(|_| Time::strptime("%H:%M", value))
        .ok()
}

/// `HH:MM` for anything that parses as a time of day, the raw value otherwise.
pub fn short_time(value: &str) -> String {
    parse_time(value)
        .map(|t| t.strftime("%H:%M").to_string())
        .unwrap_or_else(|| value.to_string())
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftForm {
    #[serde(rename = "shift_name")]
    pub name: String,
    pub time_in: String,
    pub time_out: String,
}

impl From<&Shift> for ShiftForm {
    fn from(shift: &Shift) -> Self {
        Self {
            name: shift.name.clone(),
            time_in: shift.time_in.clone(),
            time_out: shift.time_out.clone(),
        }
    }
}

impl ShiftForm {
    /// The body sent to the remote: trimmed name, times as `HH:MM:SS`.
    /// Times that do not parse are passed through untouched.
    pub fn normalized(&self) -> ShiftForm {
        let full = |value: &str| {
            parse_time(value)
                .map(|t| t.strftime("%H:%M:%S").to_string())
                .unwrap_or_else(|| value.to_string())
        };

        ShiftForm {
            name: self.name.trim().to_string(),
            time_in: full(&self.time_in),
            time_out: full(&self.time_out),
        }
    }
}

impl Form for ShiftForm {
    fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("Shift name", &self.name),
            ("Time in", &self.time_in),
            ("Time out", &self.time_out),
        ]
        .into_iter()
        .filter(|(_, value)| blank(value))
        .map(|(label, _)| label)
        .collect()
    }

    fn check_values(&self) -> Result<(), ValidationError> {
        for (field, value) in [("Time in", &self.time_in), ("Time out", &self.time_out)] {
            if parse_time(value).is_none() {
                return Err(ValidationError::Invalid {
                    field,
                    reason: "must be a time like 08:00",
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn form(time_in: &str, time_out: &str) -> ShiftForm {
        ShiftForm {
            name: "Morning".into(),
            time_in: time_in.into(),
            time_out: time_out.into(),
        }
    }

    #[test]
    fn parses_remote_record() {
        let shift: Shift = serde_json::from_value(json!({
            "shift_id": 2,
            "shift_name": "Night",
            "time_in": "22:00:00",
            "time_out": "06:00:00",
        }))
        .unwrap();

        assert_eq!(shift.id, ShiftId(2));
        assert_eq!(shift.hours(), "22:00 - 06:00");
    }

    #[test]
    fn short_time_keeps_unparseable_values() {
        assert_eq!(short_time("07:30"), "07:30");
        assert_eq!(short_time("07:30:59"), "07:30");
        assert_eq!(short_time("soon"), "soon");
    }

    #[test]
    fn all_fields_required() {
        let error = ShiftForm::default().validate().unwrap_err();
        assert_eq!(
            error,
            ValidationError::Missing(vec!["Shift name", "Time in", "Time out"])
        );
    }

    #[test]
    fn overnight_shift_is_valid() {
        assert!(form("22:00", "06:00").validate().is_ok());
    }

    #[test]
    fn rejects_malformed_time() {
        let error = form("8 o'clock", "16:00").validate().unwrap_err();
        assert_eq!(error.to_string(), "Time in must be a time like 08:00.");
    }

    #[test]
    fn rejects_loose_time_spellings() {
        for loose in ["07", "0700", "T07:00", "2024-06-01T07:00", "07:00:00.5"] {
            let error = form("08:00", loose).validate().unwrap_err();
            assert_eq!(
                error.to_string(),
                "Time out must be a time like 08:00.",
                "accepted {loose:?}"
            );
        }
    }

    #[test]
    fn short_time_leaves_loose_spellings_alone() {
        assert_eq!(short_time("0700"), "0700");
        assert_eq!(short_time("2024-06-01T07:00"), "2024-06-01T07:00");
    }

    #[test]
    fn normalized_sends_full_times() {
        let sent = ShiftForm {
            name: "  Morning ".into(),
            ..form("07:00", " 15:30:00 ")
        }
        .normalized();

        assert_eq!(sent, form("07:00:00", "15:30:00"));
        assert_eq!(
            serde_json::to_value(&sent).unwrap(),
            json!({ "shift_name": "Morning", "time_in": "07:00:00", "time_out": "15:30:00" })
        );
    }
}
