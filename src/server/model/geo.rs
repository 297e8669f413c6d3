//! Geographic primitives used by bootcamp locations and radius search.

/// Mean Earth radius in miles; divides a distance to get an angular radius.
pub const EARTH_RADIUS_MILES: f64 = 3963.0;

/// A geocoded address.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub formatted_address: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zipcode: Option<String>,
    pub country: Option<String>,
}

impl GeoLocation {
    pub fn point(&self) -> GeoPoint {
        GeoPoint {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Great-circle angle to `other` in radians (haversine formula).
    pub fn angular_distance(&self, other: &GeoPoint) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let d_lat = lat2 - lat1;
        let d_lng = (other.longitude - self.longitude).to_radians();

        let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);

        2.0 * a.sqrt().min(1.0).asin()
    }
}

/// Circle on the sphere described by a centre and an angular radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchArea {
    pub center: GeoPoint,
    /// Radius in radians.
    pub radius: f64,
}

impl SearchArea {
    pub fn from_miles(center: GeoPoint, distance_miles: f64) -> Self {
        Self {
            center,
            radius: distance_miles / EARTH_RADIUS_MILES,
        }
    }

    pub fn contains(&self, point: &GeoPoint) -> bool {
        self.center.angular_distance(point) <= self.radius
    }

    /// Latitude/longitude rectangle enclosing the circle, used to prefilter in SQL.
    ///
    /// Near the poles the longitude span is widened to the full range.
    pub fn bounding_box(&self) -> BoundingBox {
        let radius_deg = self.radius.to_degrees();
        let min_lat = (self.center.latitude - radius_deg).max(-90.0);
        let max_lat = (self.center.latitude + radius_deg).min(90.0);

        let cos_lat = self.center.latitude.to_radians().cos();
        let ratio = self.radius.sin() / cos_lat;
        let lng_span = if max_lat >= 90.0 || min_lat <= -90.0 || !(0.0..1.0).contains(&ratio) {
            180.0
        } else {
            ratio.asin().to_degrees()
        };

        BoundingBox {
            min_lat,
            max_lat,
            min_lng: self.center.longitude - lng_span,
            max_lng: self.center.longitude + lng_span,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl BoundingBox {
    /// True when the longitude range crosses the antimeridian and must be split.
    pub fn wraps(&self) -> bool {
        self.min_lng < -180.0 || self.max_lng > 180.0
    }
}
