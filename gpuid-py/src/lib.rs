use std::sync::Once;

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use tracing::{debug, error};

use gpuid_core::{Generator, GpuidError, Place, PlaceType};

static LOGGING: Once = Once::new();

fn to_py_err(err: GpuidError) -> PyErr {
    error!("{}", err);
    PyValueError::new_err(err.to_string())
}

/// Annotates a JSON place record, or a JSON list of them, with GPUIDs.
/// Returns the same shape as JSON.
#[pyfunction]
fn generate(py: Python, payload: String) -> PyResult<String> {
    let value: serde_json::Value =
        serde_json::from_str(&payload).map_err(|err| to_py_err(err.into()))?;
    let generator = Generator::default();
    let out = py
        .allow_threads(|| generator.generate_json(value))
        .map_err(to_py_err)?;
    debug!("generated gpuids for payload of {} bytes", payload.len());
    Ok(out.to_string())
}

/// The GPUID of a single place.
#[pyfunction]
fn identify(
    name: String,
    latitude: f64,
    longitude: f64,
    country_code: String,
    place_type: String,
) -> PyResult<String> {
    let place_type = PlaceType::from_raw(&place_type).map_err(to_py_err)?;
    let place = Place::new(name, latitude, longitude, country_code, place_type);
    Generator::default().gpuid(&place).map_err(to_py_err)
}

/// Route Rust logs to stderr at the given level ("INFO", "DEBUG", ...).
#[pyfunction]
fn init_logging(level: String) -> PyResult<()> {
    let level: tracing::Level = level
        .parse()
        .map_err(|_| PyValueError::new_err(format!("unknown log level {}", level)))?;
    LOGGING.call_once(|| {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(level)
            .finish();
        let _ = tracing_log::LogTracer::init();
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
    Ok(())
}

/// A Python module implemented in Rust.
#[pymodule]
fn gpuid(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(generate, m)?)?;
    m.add_function(wrap_pyfunction!(identify, m)?)?;
    m.add_function(wrap_pyfunction!(init_logging, m)?)?;
    Ok(())
}
