use std::time::Instant;

use rayon::prelude::*;
use serde_json::Value;
use tracing::debug;

use crate::coordinates::Coordinates;
use crate::error::{GpuidError, Result};
use crate::geohash::{Base32Geohash, GeohashEncoder};
use crate::name_code::name_code;
use crate::normalize::tokenize;
use crate::place::{Place, Places, RawPlace};
use crate::profile::{PlaceType, Profiles, TypeProfile};

/// `prefix + COUNTRY + name code + "@" + geohash`
pub fn assemble(profile: &TypeProfile, country_code: &str, name_code: &str, geohash: &str) -> String {
    format!(
        "{}{}{}@{}",
        profile.prefix,
        country_code.to_ascii_uppercase(),
        name_code,
        geohash
    )
}

/// Outcome of a batch processed record by record: failures do not stop the others.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Successfully identified places, in input order.
    pub places: Vec<Place>,
    /// Position in the input and reason of every rejected record.
    pub failures: Vec<(usize, GpuidError)>,
}

pub struct Generator<G = Base32Geohash> {
    profiles: Profiles,
    geohash: G,
}

impl Default for Generator {
    fn default() -> Self {
        Self {
            profiles: Profiles::default(),
            geohash: Base32Geohash,
        }
    }
}

impl Generator {
    /// Fails with [`GpuidError::Configuration`] when a profile is out of range.
    pub fn new(profiles: Profiles) -> Result<Self> {
        Self::with_geohash(profiles, Base32Geohash)
    }
}

impl<G: GeohashEncoder> Generator<G> {
    pub fn with_geohash(profiles: Profiles, geohash: G) -> Result<Self> {
        profiles.validate()?;
        Ok(Self { profiles, geohash })
    }

    pub fn profiles(&self) -> &Profiles {
        &self.profiles
    }

    pub fn name_code(&self, name: &str, place_type: PlaceType, country_code: &str) -> String {
        let words = tokenize(name, place_type, country_code);
        name_code(words, self.profiles.get(place_type).name_length)
    }

    pub fn geohash(&self, latitude: f64, longitude: f64, place_type: PlaceType) -> Result<String> {
        let profile = self.profiles.get(place_type);
        let (lat, lon) = Coordinates::new(latitude, longitude)?.rounded(profile.coord_precision);
        self.geohash.encode(&lat, &lon, profile.hash_precision)
    }

    /// The identifier of a place. Depends only on its name, coordinates, country and type.
    pub fn gpuid(&self, place: &Place) -> Result<String> {
        let geohash = self.geohash(place.latitude, place.longitude, place.place_type)?;
        let code = self.name_code(&place.name, place.place_type, &place.country_code);
        let profile = self.profiles.get(place.place_type);
        Ok(assemble(profile, &place.country_code, &code, &geohash))
    }

    /// Assigns the place its GPUID. The previous identifier, if any, becomes its ancestor;
    /// without one the ancestor is cleared.
    pub fn identify(&self, mut place: Place) -> Result<Place> {
        let gpuid = self.gpuid(&place)?;
        place.ancestor_id = place.id.take();
        place.id = Some(gpuid);
        Ok(place)
    }

    fn annotate(&self, raw: RawPlace) -> Result<Place> {
        self.identify(raw.validate()?)
    }

    /// Identifies every record, or fails with the first invalid one in input order.
    pub fn process(&self, places: Vec<RawPlace>) -> Result<Vec<Place>> {
        let start = Instant::now();
        let count = places.len();
        let results: Vec<Result<Place>> = places
            .into_par_iter()
            .map(|raw| self.annotate(raw))
            .collect();
        let places = results
            .into_iter()
            .enumerate()
            .map(|(index, res)| res.map_err(|err| err.at(index)))
            .collect::<Result<Vec<_>>>()?;
        debug!("identified {} places in {:.2?}", count, start.elapsed());
        Ok(places)
    }

    /// Identifies every valid record and reports the invalid ones alongside.
    pub fn process_isolated(&self, places: Vec<RawPlace>) -> BatchReport {
        let start = Instant::now();
        let results: Vec<Result<Place>> = places
            .into_par_iter()
            .map(|raw| self.annotate(raw))
            .collect();
        let mut report = BatchReport::default();
        for (index, res) in results.into_iter().enumerate() {
            match res {
                Ok(place) => report.places.push(place),
                Err(err) => report.failures.push((index, err)),
            }
        }
        debug!(
            "identified {} places, rejected {} in {:.2?}",
            report.places.len(),
            report.failures.len(),
            start.elapsed()
        );
        report
    }

    /// Single record in, single record out; list in, list out.
    pub fn generate(&self, input: Places<RawPlace>) -> Result<Places<Place>> {
        match input {
            Places::One(raw) => Ok(Places::One(self.annotate(raw)?)),
            Places::Many(raws) => Ok(Places::Many(self.process(raws)?)),
        }
    }

    pub fn generate_json(&self, input: Value) -> Result<Value> {
        let places = self.generate(Places::from_json(input)?)?;
        Ok(serde_json::to_value(places)?)
    }
}
