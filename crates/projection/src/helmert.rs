//! Geocentric cartesian conversion and the 7-parameter Helmert datum shift.

use crate::ellipsoid::Ellipsoid;

const SEC_TO_RAD: f64 = std::f64::consts::PI / (180.0 * 3600.0);

/// A 7-parameter Helmert transform between two geocentric frames
/// (position-vector convention, small-angle form).
///
/// Translations in meters, scale in parts per million, rotations in
/// arc-seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HelmertParams {
    pub tx: f64,
    pub ty: f64,
    pub tz: f64,
    pub s_ppm: f64,
    pub rx_sec: f64,
    pub ry_sec: f64,
    pub rz_sec: f64,
}

/// Published WGS84 → OSGB36 parameter set. Meter-level accuracy, which is
/// well inside the national grid's printed precision.
pub const WGS84_TO_OSGB36: HelmertParams = HelmertParams {
    tx: -446.448,
    ty: 125.157,
    tz: -542.060,
    s_ppm: 20.4894,
    rx_sec: -0.1502,
    ry_sec: -0.2470,
    rz_sec: -0.8421,
};

impl HelmertParams {
    /// The reverse transform. Negating the parameters is exact to well
    /// below a millimeter at these magnitudes.
    pub fn inverse(&self) -> HelmertParams {
        HelmertParams {
            tx: -self.tx,
            ty: -self.ty,
            tz: -self.tz,
            s_ppm: -self.s_ppm,
            rx_sec: -self.rx_sec,
            ry_sec: -self.ry_sec,
            rz_sec: -self.rz_sec,
        }
    }

    /// Apply the transform to a geocentric cartesian position.
    pub fn apply(&self, (x, y, z): (f64, f64, f64)) -> (f64, f64, f64) {
        let s = 1.0 + self.s_ppm * 1e-6;
        let rx = self.rx_sec * SEC_TO_RAD;
        let ry = self.ry_sec * SEC_TO_RAD;
        let rz = self.rz_sec * SEC_TO_RAD;

        (
            self.tx + s * x - rz * y + ry * z,
            self.ty + rz * x + s * y - rx * z,
            self.tz - ry * x + rx * y + s * z,
        )
    }
}

/// Geodetic latitude/longitude in degrees (ellipsoid height zero) to
/// geocentric cartesian meters.
pub fn geodetic_to_cartesian(lat_deg: f64, lon_deg: f64, ell: Ellipsoid) -> (f64, f64, f64) {
    let lat = lat_deg.to_radians();
    let lon = lon_deg.to_radians();
    let e2 = ell.e2();
    let nu = ell.a / (1.0 - e2 * lat.sin() * lat.sin()).sqrt();

    (
        nu * lat.cos() * lon.cos(),
        nu * lat.cos() * lon.sin(),
        nu * (1.0 - e2) * lat.sin(),
    )
}

/// Geocentric cartesian meters back to geodetic latitude/longitude in
/// degrees, iterating the latitude until stable below 0.01 mm on the
/// ground.
pub fn cartesian_to_geodetic((x, y, z): (f64, f64, f64), ell: Ellipsoid) -> (f64, f64) {
    let e2 = ell.e2();
    let p = (x * x + y * y).sqrt();

    let mut lat = z.atan2(p * (1.0 - e2));
    for _ in 0..12 {
        let nu = ell.a / (1.0 - e2 * lat.sin() * lat.sin()).sqrt();
        let next = (z + e2 * nu * lat.sin()).atan2(p);
        let done = (next - lat).abs() < 1e-12;
        lat = next;
        if done {
            break;
        }
    }

    (lat.to_degrees(), y.atan2(x).to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cartesian_roundtrip() {
        for &(lat, lon) in &[(51.5, -0.12), (-33.87, 151.21), (0.0, 0.0), (89.0, 45.0)] {
            let cart = geodetic_to_cartesian(lat, lon, Ellipsoid::WGS84);
            let (lat2, lon2) = cartesian_to_geodetic(cart, Ellipsoid::WGS84);
            assert!((lat - lat2).abs() < 1e-9, "lat {} -> {}", lat, lat2);
            assert!((lon - lon2).abs() < 1e-9, "lon {} -> {}", lon, lon2);
        }
    }

    #[test]
    fn test_helmert_inverse_composition() {
        let cart = geodetic_to_cartesian(51.5074, -0.1278, Ellipsoid::WGS84);
        let there = WGS84_TO_OSGB36.apply(cart);
        let back = WGS84_TO_OSGB36.inverse().apply(there);
        assert!((cart.0 - back.0).abs() < 0.01);
        assert!((cart.1 - back.1).abs() < 0.01);
        assert!((cart.2 - back.2).abs() < 0.01);
    }

    #[test]
    fn test_helmert_shift_magnitude() {
        // The WGS84/OSGB36 datum separation is on the order of 100 meters.
        let cart = geodetic_to_cartesian(51.5074, -0.1278, Ellipsoid::WGS84);
        let shifted = WGS84_TO_OSGB36.apply(cart);
        let d = ((cart.0 - shifted.0).powi(2)
            + (cart.1 - shifted.1).powi(2)
            + (cart.2 - shifted.2).powi(2))
        .sqrt();
        assert!(d > 100.0 && d < 1000.0, "shift magnitude {}", d);
    }
}
