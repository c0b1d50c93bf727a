//! Common test fixtures: well-known positions and reference strings.

/// (latitude, longitude) pairs for well-known places.
pub mod points {
    /// Central London (BNG square TQ, MGRS zone 30U)
    pub const LONDON: (f64, f64) = (51.5074, -0.1278);

    /// Exeter area, the DD example from the converter documentation
    pub const EXETER: (f64, f64) = (50.664782, -3.4386112);

    /// Edinburgh (BNG square NT)
    pub const EDINBURGH: (f64, f64) = (55.9533, -3.1883);

    /// Sydney (southern and eastern hemispheres)
    pub const SYDNEY: (f64, f64) = (-33.8688, 151.2093);

    /// Paris (great-circle fixture endpoint, outside BNG coverage)
    pub const PARIS: (f64, f64) = (48.8566, 2.3522);

    /// Equator / prime meridian intersection, outside every regional grid
    pub const NULL_ISLAND: (f64, f64) = (0.0, 0.0);
}

/// Reference strings in each notation, all denoting in-coverage positions.
pub mod refs {
    pub const DD: &str = "50.664782,-3.4386112";
    pub const DDM: &str = "50° 39.887' N, 3° 26.317' W";
    pub const DMS: &str = "50° 39' 53.2\" N, 3° 26' 19.0\" W";
    pub const BNG: &str = "TQ 30500 81500";
    pub const MGRS: &str = "30U YC 56789 12345";
}
