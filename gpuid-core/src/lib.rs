pub use rayon;
pub use serde_json;
pub use smallvec;

pub mod coordinates;
pub mod error;
mod folding;
pub mod generator;
pub mod geohash;
pub mod name_code;
pub mod normalize;
pub mod place;
pub mod profile;
pub mod stopwords;

pub use error::{GpuidError, Result};
pub use folding::fold;
pub use generator::{BatchReport, Generator};
pub use place::{Place, Places, RawPlace};
pub use profile::{PlaceType, Profiles, TypeProfile};

/// Identifies one place or a list of places with the reference profiles.
pub fn gpuid(input: Places<RawPlace>) -> Result<Places<Place>> {
    Generator::default().generate(input)
}
