use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum_macros::{EnumIter, EnumString, IntoStaticStr};

use crate::error::{GpuidError, Result};

/// Rounding beyond this many decimals cannot be done exactly on an `f64` scaled into a `u128`.
pub const MAX_COORD_PRECISION: usize = 20;

/// Kind of place a record describes. Selects the [`TypeProfile`] used to build its identifier.
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
    EnumString,
    EnumIter,
    IntoStaticStr,
    strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PlaceType {
    /// A settlement or area; only the name before the first comma counts.
    Cluster,
    /// A stop or station; every comma-separated part of the name counts.
    Group,
}

impl PlaceType {
    pub fn from_raw(raw: &str) -> Result<Self> {
        raw.parse()
            .map_err(|_| GpuidError::UnknownTypeProfile(raw.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TypeProfile {
    pub prefix: String,
    pub coord_precision: usize,
    pub hash_precision: usize,
    pub name_length: usize,
}

/// The profile table, one entry per [`PlaceType`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Profiles {
    pub cluster: TypeProfile,
    pub group: TypeProfile,
}

impl Default for Profiles {
    fn default() -> Self {
        Self {
            cluster: TypeProfile {
                prefix: "c|".to_string(),
                coord_precision: 2,
                hash_precision: 5,
                name_length: 8,
            },
            group: TypeProfile {
                prefix: "g|".to_string(),
                coord_precision: 4,
                hash_precision: 6,
                name_length: 8,
            },
        }
    }
}

impl Profiles {
    pub fn get(&self, place_type: PlaceType) -> &TypeProfile {
        match place_type {
            PlaceType::Cluster => &self.cluster,
            PlaceType::Group => &self.group,
        }
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let profiles: Profiles = serde_json::from_str(raw)?;
        profiles.validate()?;
        Ok(profiles)
    }

    pub fn validate(&self) -> Result<()> {
        for (place_type, profile) in [
            (PlaceType::Cluster, &self.cluster),
            (PlaceType::Group, &self.group),
        ] {
            if profile.coord_precision > MAX_COORD_PRECISION {
                return Err(GpuidError::Configuration(format!(
                    "{} coord_precision {} exceeds {}",
                    place_type, profile.coord_precision, MAX_COORD_PRECISION
                )));
            }
            if profile.hash_precision == 0 {
                return Err(GpuidError::Configuration(format!(
                    "{} hash_precision must be at least 1",
                    place_type
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn parses_known_types_only() {
        assert_eq!(PlaceType::from_raw("cluster").unwrap(), PlaceType::Cluster);
        assert_eq!(PlaceType::from_raw("group").unwrap(), PlaceType::Group);
        for raw in ["Cluster", "city", ""] {
            match PlaceType::from_raw(raw) {
                Err(GpuidError::UnknownTypeProfile(t)) => assert_eq!(t, raw),
                other => panic!("expected unknown type for {raw:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for place_type in PlaceType::iter() {
            let name: &'static str = place_type.into();
            assert_eq!(place_type.to_string(), name);
            assert_eq!(PlaceType::from_raw(name).unwrap(), place_type);
        }
    }

    #[test]
    fn reference_table() {
        let profiles = Profiles::default();
        let cluster = profiles.get(PlaceType::Cluster);
        assert_eq!(
            (cluster.prefix.as_str(), cluster.coord_precision, cluster.hash_precision, cluster.name_length),
            ("c|", 2, 5, 8)
        );
        let group = profiles.get(PlaceType::Group);
        assert_eq!(
            (group.prefix.as_str(), group.coord_precision, group.hash_precision, group.name_length),
            ("g|", 4, 6, 8)
        );
    }

    #[test]
    fn loads_overrides_from_json() {
        let raw = r#"{
            "cluster": {"prefix": "C-", "coord_precision": 1, "hash_precision": 4, "name_length": 6},
            "group": {"prefix": "G-", "coord_precision": 3, "hash_precision": 7, "name_length": 10}
        }"#;
        let profiles = Profiles::from_json(raw).unwrap();
        assert_eq!(profiles.get(PlaceType::Cluster).prefix, "C-");
        assert_eq!(profiles.get(PlaceType::Group).name_length, 10);
    }

    #[test]
    fn rejects_unusable_overrides() {
        let mut profiles = Profiles::default();
        profiles.group.hash_precision = 0;
        assert!(matches!(
            profiles.validate(),
            Err(GpuidError::Configuration(_))
        ));
        let mut profiles = Profiles::default();
        profiles.cluster.coord_precision = MAX_COORD_PRECISION + 1;
        assert!(matches!(
            profiles.validate(),
            Err(GpuidError::Configuration(_))
        ));
        assert!(matches!(
            Profiles::from_json(r#"{"cluster": {}}"#),
            Err(GpuidError::Decode(_))
        ));
    }
}
