use crate::error::{Result, TourError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    pub name: String,
    pub coordinates: Coordinates,
    pub description: String,
}

impl Stop {
    pub fn new(name: &str, coordinates: Coordinates, description: &str) -> Self {
        Self {
            name: name.to_string(),
            coordinates,
            description: description.to_string(),
        }
    }
}

/// Immutable, ordered, non-empty list of tour stops.
///
/// Cloning is cheap: the stops are shared behind an `Arc` and never mutated
/// after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct StopRegistry {
    stops: Arc<[Stop]>,
}

impl StopRegistry {
    pub fn new(stops: Vec<Stop>) -> Result<Self> {
        if stops.is_empty() {
            return Err(TourError::EmptyRegistry);
        }
        Ok(Self {
            stops: stops.into(),
        })
    }

    /// The five cities the tour ships with when no stop file is configured.
    pub fn builtin() -> Self {
        Self {
            stops: builtin_stops().into(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let stops: Vec<Stop> = serde_json::from_str(json)
            .map_err(|e| TourError::Config(format!("Invalid stop list: {e}")))?;
        Self::new(stops)
    }

    #[cfg(feature = "ssr")]
    pub fn from_json_file(path: &std::path::Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            TourError::Config(format!("Failed to read stop file {}: {e}", path.display()))
        })?;
        Self::from_json(&json)
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Always false: an empty registry cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Stop> {
        self.stops.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Stop> {
        self.stops.iter()
    }

    pub fn to_vec(&self) -> Vec<Stop> {
        self.stops.to_vec()
    }
}

fn builtin_stops() -> Vec<Stop> {
    vec![
        Stop::new(
            "Delhi",
            Coordinates::new(28.6139, 77.209),
            "Delhi: Capital of India.",
        ),
        Stop::new(
            "Mumbai",
            Coordinates::new(19.076, 72.8777),
            "Mumbai: Financial hub of India.",
        ),
        Stop::new(
            "Chennai",
            Coordinates::new(13.0827, 80.2707),
            "Chennai: Cultural capital of South India.",
        ),
        Stop::new(
            "Kolkata",
            Coordinates::new(22.5726, 88.3639),
            "Kolkata: City of Joy.",
        ),
        Stop::new(
            "Hyderabad",
            Coordinates::new(17.385, 78.4867),
            "Hyderabad: Known for its biryani.",
        ),
    ]
}
