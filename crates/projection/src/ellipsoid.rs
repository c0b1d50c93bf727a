//! Reference ellipsoids.

/// An ellipsoid of revolution, by semi-major and semi-minor axis in meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipsoid {
    pub a: f64,
    pub b: f64,
}

impl Ellipsoid {
    /// WGS84, the GPS datum ellipsoid.
    pub const WGS84: Ellipsoid = Ellipsoid {
        a: 6_378_137.0,
        b: 6_356_752.314_245,
    };

    /// Airy 1830, the OSGB36 datum ellipsoid.
    pub const AIRY_1830: Ellipsoid = Ellipsoid {
        a: 6_377_563.396,
        b: 6_356_256.909,
    };

    /// First eccentricity squared.
    pub fn e2(&self) -> f64 {
        (self.a * self.a - self.b * self.b) / (self.a * self.a)
    }

    /// Third flattening, used by the meridional arc series.
    pub fn n(&self) -> f64 {
        (self.a - self.b) / (self.a + self.b)
    }
}
