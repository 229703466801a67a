use serde::{Deserialize, Serialize};

use crate::{Form, LocationId, Named, ValidationError, employee::Employee, form::blank};

/// A placement site. The remote API calls these "customers".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(rename = "customer_id")]
    pub id: LocationId,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub code: String,
    /// `"{lat},{lng}"`, spelled the way the remote spells it.
    #[serde(rename = "latitude_longtitude", default)]
    pub coordinates: String,
    #[serde(default)]
    pub radius: u32,
}

impl Location {
    pub fn employee_count(&self, employees: &[Employee]) -> usize {
        employees
            .iter()
            .filter(|e| e.location_id == Some(self.id))
            .count()
    }
}

impl Named for Location {
    type Id = LocationId;

    fn id(&self) -> LocationId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Newest first.
pub fn sort_newest_first(locations: &mut [Location]) {
    locations.sort_by(|a, b| b.id.cmp(&a.id));
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationForm {
    pub name: String,
    pub address: String,
    pub code: String,
    pub latitude: String,
    pub longitude: String,
    /// Meters, kept as typed so a bad value can be reported instead of lost.
    pub radius: String,
}

/// The JSON body the remote expects on create and update.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationPayload {
    pub name: String,
    pub address: String,
    pub code: String,
    pub latitude_longtitude: String,
    pub radius: u32,
}

impl LocationForm {
    fn radius_meters(&self) -> Option<u32> {
        self.radius.trim().parse().ok().filter(|&meters| meters > 0)
    }

    /// Only meaningful once the form validates.
    pub fn payload(&self) -> LocationPayload {
        LocationPayload {
            name: self.name.trim().to_string(),
            address: self.address.trim().to_string(),
            code: self.code.trim().to_string(),
            latitude_longtitude: format!("{},{}", self.latitude.trim(), self.longitude.trim()),
            radius: self.radius_meters().unwrap_or_default(),
        }
    }
}

impl From<&Location> for LocationForm {
    fn from(location: &Location) -> Self {
        let (latitude, longitude) = split_coordinates(&location.coordinates);

        Self {
            name: location.name.clone(),
            address: location.address.clone(),
            code: location.code.clone(),
            latitude,
            longitude,
            radius: location.radius.to_string(),
        }
    }
}

/// Split `"lat,lng"` into its halves; a missing half comes back empty and
/// anything after a second comma (such as an altitude) is dropped.
pub fn split_coordinates(coordinates: &str) -> (String, String) {
    let mut parts = coordinates.split(',').map(str::trim);
    let latitude = parts.next().unwrap_or_default().to_string();
    let longitude = parts.next().unwrap_or_default().to_string();
    (latitude, longitude)
}

fn check_degrees(
    field: &'static str,
    value: &str,
    limit: f64,
) -> Result<(), ValidationError> {
    match value.trim().parse::<f64>() {
        Ok(degrees) if degrees.is_finite() && degrees.abs() <= limit => Ok(()),
        Ok(_) => Err(ValidationError::Invalid {
            field,
            reason: "is out of range",
        }),
        Err(_) => Err(ValidationError::Invalid {
            field,
            reason: "must be a decimal number",
        }),
    }
}

impl Form for LocationForm {
    fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("Location name", &self.name),
            ("Address", &self.address),
            ("Code", &self.code),
            ("Latitude", &self.latitude),
            ("Longitude", &self.longitude),
            ("Radius", &self.radius),
        ]
        .into_iter()
        .filter(|(_, value)| blank(value))
        .map(|(label, _)| label)
        .collect()
    }

    fn check_values(&self) -> Result<(), ValidationError> {
        check_degrees("Latitude", &self.latitude, 90.0)?;
        check_degrees("Longitude", &self.longitude, 180.0)?;

        if self.radius_meters().is_none() {
            return Err(ValidationError::Invalid {
                field: "Radius",
                reason: "must be a whole number of meters",
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn location(id: i64) -> Location {
        Location {
            id: LocationId(id),
            name: format!("Site {id}"),
            address: "Jl. Merdeka 1".into(),
            code: format!("S{id}"),
            coordinates: "-6.2, 106.8".into(),
            radius: 100,
        }
    }

    fn filled_form() -> LocationForm {
        LocationForm {
            name: "Head office".into(),
            address: "Jl. Sudirman 5".into(),
            code: "HO".into(),
            latitude: "-6.2088".into(),
            longitude: "106.8456".into(),
            radius: "50".into(),
        }
    }

    #[test]
    fn parses_remote_customer() {
        let location: Location = serde_json::from_value(json!({
            "customer_id": 9,
            "name": "Warehouse",
            "address": "Jl. Industri 3",
            "code": "WH",
            "latitude_longtitude": "-6.1,106.7",
            "radius": 200,
        }))
        .unwrap();

        assert_eq!(location.id, LocationId(9));
        assert_eq!(location.coordinates, "-6.1,106.7");
        assert_eq!(location.radius, 200);
    }

    #[test]
    fn edit_form_splits_coordinates() {
        let form = LocationForm::from(&location(1));
        assert_eq!(form.latitude, "-6.2");
        assert_eq!(form.longitude, "106.8");
        assert_eq!(form.radius, "100");
    }

    #[test]
    fn split_ignores_trailing_component() {
        assert_eq!(
            split_coordinates("-6.2,106.8,0"),
            ("-6.2".to_string(), "106.8".to_string())
        );
    }

    #[test]
    fn split_without_comma_leaves_longitude_empty() {
        assert_eq!(
            split_coordinates("-6.2"),
            ("-6.2".to_string(), String::new())
        );
    }

    #[test]
    fn payload_joins_coordinates() {
        let payload = filled_form().payload();
        assert_eq!(payload.latitude_longtitude, "-6.2088,106.8456");
        assert_eq!(payload.radius, 50);
        assert_eq!(
            serde_json::to_value(&payload).unwrap()["latitude_longtitude"],
            "-6.2088,106.8456"
        );
    }

    #[test]
    fn blank_radius_counts_as_missing() {
        let form = LocationForm {
            radius: "  ".into(),
            ..filled_form()
        };
        assert_eq!(form.missing_fields(), vec!["Radius"]);
    }

    #[test]
    fn radius_must_be_whole_positive_meters() {
        for bad in ["-5", "1.5", "0", "wide"] {
            let form = LocationForm {
                radius: bad.into(),
                ..filled_form()
            };
            assert_eq!(
                form.validate().unwrap_err().to_string(),
                "Radius must be a whole number of meters.",
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn latitude_must_be_in_range() {
        let form = LocationForm {
            latitude: "91".into(),
            ..filled_form()
        };
        assert_eq!(
            form.validate().unwrap_err().to_string(),
            "Latitude is out of range."
        );
    }

    #[test]
    fn longitude_must_be_numeric() {
        let form = LocationForm {
            longitude: "east".into(),
            ..filled_form()
        };
        assert_eq!(
            form.validate().unwrap_err().to_string(),
            "Longitude must be a decimal number."
        );
    }

    #[test]
    fn sorts_newest_first() {
        let mut locations = vec![location(2), location(7), location(4)];
        sort_newest_first(&mut locations);
        let ids: Vec<_> = locations.iter().map(|l| l.id.0).collect();
        assert_eq!(ids, vec![7, 4, 2]);
    }
}
