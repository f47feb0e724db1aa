use crate::domain::model::{NormalizedPlanet, RawPlanet};
use crate::utils::error::{PlanetError, Result};
use serde_json::{Map, Value};

/// Maps a raw planets resource to its normalized form.
///
/// Only `name`, `surface_water` and `films` are read; the first one that is
/// missing or of the wrong kind is reported as a `ShapeError`.
pub fn map_to_planet(raw: &RawPlanet) -> Result<NormalizedPlanet> {
    let object = raw.as_object().ok_or_else(|| PlanetError::ShapeError {
        field: "<root>".to_string(),
        expected: "an object".to_string(),
        found: kind_of(raw).to_string(),
    })?;

    let name = required_str(object, "name")?;
    let surface_water = required_str(object, "surface_water")?;
    let films = required_array(object, "films")?;

    Ok(NormalizedPlanet {
        name: name.to_string(),
        surface_water: surface_water.to_string(),
        appeared_in: films.len(),
    })
}

fn required_str<'a>(object: &'a Map<String, Value>, field: &str) -> Result<&'a str> {
    match object.get(field) {
        Some(Value::String(value)) => Ok(value.as_str()),
        other => Err(shape_error(field, "a string", other)),
    }
}

fn required_array<'a>(object: &'a Map<String, Value>, field: &str) -> Result<&'a [Value]> {
    match object.get(field) {
        Some(Value::Array(items)) => Ok(items.as_slice()),
        other => Err(shape_error(field, "an array", other)),
    }
}

fn shape_error(field: &str, expected: &str, found: Option<&Value>) -> PlanetError {
    PlanetError::ShapeError {
        field: field.to_string(),
        expected: expected.to_string(),
        found: found.map(kind_of).unwrap_or("missing").to_string(),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
