/// A geographical coordinate in degrees: latitude first, longitude second.
///
/// # Examples
///
/// ```
/// use flightwx::LatLon;
///
/// let jfk = LatLon(40.639801, -73.7789);
/// assert_eq!(jfk.0, 40.639801); // Latitude
/// assert_eq!(jfk.1, -73.7789); // Longitude
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon(pub f64, pub f64);
