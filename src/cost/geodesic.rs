//! Great-circle distance between named locations.
//!
//! Distances use the haversine formula on a sphere with the IUGG mean
//! Earth radius. Compared with an ellipsoidal geodesic the error stays
//! below about 0.5%, which is irrelevant for ranking tours.

use super::CostModel;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometres (IUGG).
pub const EARTH_RADIUS_KM: f64 = 6371.0088;

/// Reasons an item cannot be placed on the globe.
#[derive(Debug, Clone, PartialEq)]
pub enum GeoError {
    /// Latitude outside [-90, 90] or not finite.
    Latitude(f64),
    /// Longitude outside [-180, 180] or not finite.
    Longitude(f64),
    /// The item has no known location (a missing, non-finite coordinate).
    Unresolved(String),
}

impl fmt::Display for GeoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeoError::Latitude(v) => write!(f, "latitude {v} outside [-90, 90]"),
            GeoError::Longitude(v) => write!(f, "longitude {v} outside [-180, 180]"),
            GeoError::Unresolved(name) => write!(f, "no location known for '{name}'"),
        }
    }
}

impl std::error::Error for GeoError {}

/// A validated latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoPoint {
    lat: f64,
    lon: f64,
}

impl GeoPoint {
    /// Creates a point, rejecting out-of-range or non-finite coordinates.
    pub fn new(lat: f64, lon: f64) -> Result<Self, GeoError> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(GeoError::Latitude(lat));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(GeoError::Longitude(lon));
        }
        Ok(Self { lat, lon })
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Great-circle distance to `other` in kilometres.
    pub fn haversine_km(&self, other: &GeoPoint) -> f64 {
        let (phi1, phi2) = (self.lat.to_radians(), other.lat.to_radians());
        let d_phi = phi2 - phi1;
        let d_lambda = (other.lon - self.lon).to_radians();

        let h = (d_phi / 2.0).sin().powi(2)
            + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_KM * h.sqrt().min(1.0).asin()
    }
}

/// Resolves an item to a point on the globe.
pub trait Locate {
    fn locate(&self) -> Result<GeoPoint, GeoError>;
}

impl Locate for GeoPoint {
    fn locate(&self) -> Result<GeoPoint, GeoError> {
        Ok(*self)
    }
}

/// A named place. Coordinates are checked when the city is priced, so a
/// city built from bad data surfaces as a domain error during the run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct City {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

impl City {
    pub fn new(name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            name: name.into(),
            lat,
            lon,
        }
    }

    /// `(lat, lon)` in degrees.
    pub fn coordinates_lat_lon(&self) -> (f64, f64) {
        (self.lat, self.lon)
    }

    /// `(lon, lat)` in degrees, the x/y order renderers expect.
    pub fn coordinates_lon_lat(&self) -> (f64, f64) {
        (self.lon, self.lat)
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl Locate for City {
    fn locate(&self) -> Result<GeoPoint, GeoError> {
        if !self.lat.is_finite() || !self.lon.is_finite() {
            return Err(GeoError::Unresolved(self.name.clone()));
        }
        GeoPoint::new(self.lat, self.lon)
    }
}

/// Great-circle distance in kilometres between any [`Locate`] items.
#[derive(Debug)]
pub struct Geodesic<T> {
    _marker: std::marker::PhantomData<fn(&T)>,
}

impl<T> Geodesic<T> {
    pub fn new() -> Self {
        Self {
            _marker: std::marker::PhantomData,
        }
    }
}

impl<T> Default for Geodesic<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Geodesic<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> Copy for Geodesic<T> {}

impl<T: Locate> CostModel for Geodesic<T> {
    type Item = T;
    type Error = GeoError;

    fn pairwise_cost(&self, a: &T, b: &T) -> Result<f64, GeoError> {
        Ok(a.locate()?.haversine_km(&b.locate()?))
    }
}
