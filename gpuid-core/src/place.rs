use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{GpuidError, Result};
use crate::profile::PlaceType;

const ANCESTOR_ID: &str = "ancestorId";

/// A place record as it arrives from an upstream source, before validation.
///
/// Attributes other than the identifier inputs are kept in `extra` and written back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RawPlace {
    pub id: Option<String>,
    pub name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub country_code: Option<String>,
    #[serde(rename = "type")]
    pub place_type: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RawPlace {
    pub fn validate(self) -> Result<Place> {
        let name = required(self.name, "name")?;
        let place_type = required(self.place_type, "type")?;
        let latitude = required(self.latitude, "latitude")?;
        let longitude = required(self.longitude, "longitude")?;
        let country_code = required(self.country_code, "countryCode")?;
        let place_type = PlaceType::from_raw(&place_type)?;
        let mut extra = self.extra;
        extra.remove(ANCESTOR_ID);
        Ok(Place {
            id: self.id,
            ancestor_id: None,
            name,
            latitude,
            longitude,
            country_code,
            place_type,
            extra,
        })
    }
}

fn required<T>(value: Option<T>, field: &'static str) -> Result<T> {
    value.ok_or(GpuidError::MissingField { field })
}

/// A validated place record. Once processed, `id` holds its GPUID and `ancestor_id` the
/// identifier it arrived with, if any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ancestor_id: Option<String>,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub country_code: String,
    #[serde(rename = "type")]
    pub place_type: PlaceType,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Place {
    pub fn new(
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
        country_code: impl Into<String>,
        place_type: PlaceType,
    ) -> Self {
        Self {
            id: None,
            ancestor_id: None,
            name: name.into(),
            latitude,
            longitude,
            country_code: country_code.into(),
            place_type,
            extra: Map::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// One record or an ordered list of them. Processing keeps the shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum Places<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> Places<T> {
    pub fn len(&self) -> usize {
        match self {
            Places::Many(v) => v.len(),
            Places::One(_) => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_vec(self) -> Vec<T> {
        match self {
            Places::Many(v) => v,
            Places::One(p) => vec![p],
        }
    }
}

impl Places<RawPlace> {
    pub fn from_json(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn raw(value: Value) -> RawPlace {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn validates_complete_record() {
        let place = raw(json!({
            "id": "up-1",
            "name": "Cisano",
            "latitude": 45.528962,
            "longitude": 10.7272055,
            "countryCode": "it",
            "type": "group",
            "source": "feed-a",
        }))
        .validate()
        .unwrap();
        assert_eq!(place.id.as_deref(), Some("up-1"));
        assert_eq!(place.place_type, PlaceType::Group);
        assert_eq!(place.extra.get("source"), Some(&json!("feed-a")));
    }

    #[test]
    fn missing_or_null_fields() {
        let full = json!({
            "name": "Cisano",
            "latitude": 45.5,
            "longitude": 10.7,
            "countryCode": "it",
            "type": "group",
        });
        for field in ["name", "type", "latitude", "longitude", "countryCode"] {
            for absent in [None, Some(Value::Null)] {
                let mut value = full.clone();
                let obj = value.as_object_mut().unwrap();
                match absent {
                    None => obj.remove(field),
                    Some(null) => obj.insert(field.to_string(), null),
                };
                match raw(value).validate() {
                    Err(GpuidError::MissingField { field: f }) => assert_eq!(f, field),
                    other => panic!("expected missing {field}, got {other:?}"),
                }
            }
        }
    }

    #[test]
    fn first_missing_field_is_reported() {
        match RawPlace::default().validate() {
            Err(GpuidError::MissingField { field }) => assert_eq!(field, "name"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn unknown_type() {
        let place = raw(json!({
            "name": "Somewhere",
            "latitude": 1.0,
            "longitude": 2.0,
            "countryCode": "fr",
            "type": "airport",
        }));
        assert!(matches!(
            place.validate(),
            Err(GpuidError::UnknownTypeProfile(t)) if t == "airport"
        ));
    }

    #[test]
    fn incoming_ancestor_attribute_is_dropped() {
        let place = raw(json!({
            "name": "Cisano",
            "latitude": 45.5,
            "longitude": 10.7,
            "countryCode": "it",
            "type": "group",
            "ancestorId": "stale",
        }))
        .validate()
        .unwrap();
        assert!(place.extra.is_empty());
        assert_eq!(place.ancestor_id, None);
    }

    #[test]
    fn null_id_is_no_id_and_ids_are_strings() {
        let place = raw(json!({
            "id": null,
            "name": "Cisano",
            "latitude": 45.5,
            "longitude": 10.7,
            "countryCode": "it",
            "type": "group",
        }))
        .validate()
        .unwrap();
        assert_eq!(place.id, None);
        assert!(matches!(
            Places::from_json(json!({"id": 42, "name": "Cisano"})),
            Err(GpuidError::Decode(_))
        ));
    }

    #[test]
    fn serializes_camel_case_without_empty_ids() {
        let place = Place::new("Troyes", 48.32633, 4.11027, "fr", PlaceType::Cluster);
        assert_eq!(
            serde_json::to_value(&place).unwrap(),
            json!({
                "name": "Troyes",
                "latitude": 48.32633,
                "longitude": 4.11027,
                "countryCode": "fr",
                "type": "cluster",
            })
        );
    }

    #[test]
    fn single_or_many() {
        let one = Places::from_json(json!({"name": "A"})).unwrap();
        assert!(matches!(one, Places::One(_)));
        let many = Places::from_json(json!([{"name": "A"}, {"name": "B"}])).unwrap();
        assert_eq!(many.len(), 2);
        let empty = Places::from_json(json!([])).unwrap();
        assert!(empty.is_empty());
        assert!(matches!(
            Places::from_json(json!("Paris")),
            Err(GpuidError::Decode(_))
        ));
        assert!(matches!(
            Places::from_json(json!({"name": "A", "latitude": "north"})),
            Err(GpuidError::Decode(_))
        ));
    }
}
