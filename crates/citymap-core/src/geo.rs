// crates/citymap-core/src/geo.rs

//! Coordinate bounds checks shared by the bulk parser, the add-request
//! validator and the nearest-city query.

pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;

/// Anything that can be read as a coordinate in degrees.
///
/// Numbers convert directly; strings are trimmed and parsed. Values that are
/// not numeric, or not finite, yield `None`.
pub trait Degrees {
    fn as_degrees(&self) -> Option<f64>;
}

impl Degrees for f64 {
    #[inline]
    fn as_degrees(&self) -> Option<f64> {
        self.is_finite().then_some(*self)
    }
}

impl Degrees for i32 {
    #[inline]
    fn as_degrees(&self) -> Option<f64> {
        Some(f64::from(*self))
    }
}

impl Degrees for str {
    fn as_degrees(&self) -> Option<f64> {
        parse_degrees(self)
    }
}

impl Degrees for String {
    fn as_degrees(&self) -> Option<f64> {
        parse_degrees(self)
    }
}

impl<T: Degrees + ?Sized> Degrees for &T {
    #[inline]
    fn as_degrees(&self) -> Option<f64> {
        (**self).as_degrees()
    }
}

/// Parses a textual coordinate. Returns `None` for anything that is not a
/// finite number (`"abc"`, `""`, `"NaN"`, `"inf"`).
pub fn parse_degrees(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// True iff latitude is in [-90, 90] and longitude in [-180, 180], both
/// bounds inclusive. Non-numeric input is invalid, never a panic.
///
/// ```rust
/// use citymap_core::is_valid_coordinate;
///
/// assert!(is_valid_coordinate(90.0, -180.0));
/// assert!(is_valid_coordinate("47.61", "-122.33"));
/// assert!(!is_valid_coordinate("north", 0.0));
/// assert!(!is_valid_coordinate(0.0, "180.1"));
/// ```
pub fn is_valid_coordinate<A, B>(latitude: A, longitude: B) -> bool
where
    A: Degrees,
    B: Degrees,
{
    match (latitude.as_degrees(), longitude.as_degrees()) {
        (Some(lat), Some(lon)) => {
            (MIN_LATITUDE..=MAX_LATITUDE).contains(&lat)
                && (MIN_LONGITUDE..=MAX_LONGITUDE).contains(&lon)
        }
        _ => false,
    }
}

/// Planar distance on raw degrees. Longitude degrees are not scaled by
/// latitude; this is not a great-circle distance.
#[inline]
pub fn planar_distance(lat_a: f64, lon_a: f64, lat_b: f64, lon_b: f64) -> f64 {
    let dlat = lat_a - lat_b;
    let dlon = lon_a - lon_b;
    (dlat * dlat + dlon * dlon).sqrt()
}
