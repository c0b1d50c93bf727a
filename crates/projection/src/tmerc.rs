//! Transverse Mercator projection.
//!
//! Uses the Ordnance Survey series form (meridional arc plus the
//! I..XIIA terms), which is the published formulation for the national
//! grid and is comfortably sub-centimeter across a UTM zone's width.

use coord_common::GridCoord;

use crate::ellipsoid::Ellipsoid;

/// A transverse Mercator projection instance.
///
/// Holds the ellipsoid, central-meridian scale factor, true origin and
/// false origin that together define one grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransverseMercator {
    pub ellipsoid: Ellipsoid,
    /// Central meridian scale factor (F0)
    pub scale: f64,
    /// True origin latitude in radians
    pub lat0: f64,
    /// True origin longitude in radians
    pub lon0: f64,
    /// False easting in meters (E0)
    pub false_easting: f64,
    /// False northing in meters (N0)
    pub false_northing: f64,
}

impl TransverseMercator {
    /// The OSGB36 national grid: Airy 1830, true origin 49°N 2°W, false
    /// origin 400 km west and 100 km north of the true origin.
    pub fn national_grid() -> Self {
        Self {
            ellipsoid: Ellipsoid::AIRY_1830,
            scale: 0.999_601_271_7,
            lat0: 49.0_f64.to_radians(),
            lon0: (-2.0_f64).to_radians(),
            false_easting: 400_000.0,
            false_northing: -100_000.0,
        }
    }

    /// A UTM zone (1..=60) on WGS84.
    pub fn utm_zone(zone: u8) -> Self {
        let central_meridian = f64::from(zone) * 6.0 - 183.0;
        Self {
            ellipsoid: Ellipsoid::WGS84,
            scale: 0.9996,
            lat0: 0.0,
            lon0: central_meridian.to_radians(),
            false_easting: 500_000.0,
            false_northing: 0.0,
        }
    }

    /// Meridional arc length from the true origin latitude to `lat`
    /// (radians), scaled by F0.
    fn meridional_arc(&self, lat: f64) -> f64 {
        let n = self.ellipsoid.n();
        let n2 = n * n;
        let n3 = n2 * n;
        let dlat = lat - self.lat0;
        let slat = lat + self.lat0;

        let ma = (1.0 + n + 1.25 * n2 + 1.25 * n3) * dlat;
        let mb = (3.0 * n + 3.0 * n2 + 2.625 * n3) * dlat.sin() * slat.cos();
        let mc = (1.875 * n2 + 1.875 * n3) * (2.0 * dlat).sin() * (2.0 * slat).cos();
        let md = (35.0 / 24.0) * n3 * (3.0 * dlat).sin() * (3.0 * slat).cos();

        self.ellipsoid.b * self.scale * (ma - mb + mc - md)
    }

    /// Forward projection: geographic degrees to grid easting/northing in
    /// meters.
    pub fn forward(&self, lat_deg: f64, lon_deg: f64) -> GridCoord {
        let lat = lat_deg.to_radians();
        let lon = lon_deg.to_radians();
        let a = self.ellipsoid.a;
        let e2 = self.ellipsoid.e2();

        let (sin_lat, cos_lat) = lat.sin_cos();
        let tan2 = lat.tan() * lat.tan();
        let tan4 = tan2 * tan2;

        let nu = a * self.scale / (1.0 - e2 * sin_lat * sin_lat).sqrt();
        let rho = a * self.scale * (1.0 - e2) / (1.0 - e2 * sin_lat * sin_lat).powf(1.5);
        let eta2 = nu / rho - 1.0;

        let i = self.meridional_arc(lat) + self.false_northing;
        let ii = nu / 2.0 * sin_lat * cos_lat;
        let iii = nu / 24.0 * sin_lat * cos_lat.powi(3) * (5.0 - tan2 + 9.0 * eta2);
        let iiia = nu / 720.0 * sin_lat * cos_lat.powi(5) * (61.0 - 58.0 * tan2 + tan4);
        let iv = nu * cos_lat;
        let v = nu / 6.0 * cos_lat.powi(3) * (nu / rho - tan2);
        let vi = nu / 120.0
            * cos_lat.powi(5)
            * (5.0 - 18.0 * tan2 + tan4 + 14.0 * eta2 - 58.0 * tan2 * eta2);

        let dlon = lon - self.lon0;
        let dlon2 = dlon * dlon;

        let northing = i + ii * dlon2 + iii * dlon2 * dlon2 + iiia * dlon2 * dlon2 * dlon2;
        let easting =
            self.false_easting + iv * dlon + v * dlon * dlon2 + vi * dlon * dlon2 * dlon2;

        GridCoord::new(easting, northing)
    }

    /// Inverse projection: grid easting/northing in meters to geographic
    /// degrees.
    pub fn inverse(&self, easting: f64, northing: f64) -> (f64, f64) {
        let a = self.ellipsoid.a;
        let e2 = self.ellipsoid.e2();

        // Footpoint latitude: iterate the meridional arc until the
        // residual is below 0.01 mm.
        let mut lat = (northing - self.false_northing) / (a * self.scale) + self.lat0;
        for _ in 0..32 {
            let delta = northing - self.false_northing - self.meridional_arc(lat);
            if delta.abs() < 1e-5 {
                break;
            }
            lat += delta / (a * self.scale);
        }

        let (sin_lat, cos_lat) = lat.sin_cos();
        let tan_lat = lat.tan();
        let tan2 = tan_lat * tan_lat;
        let tan4 = tan2 * tan2;
        let tan6 = tan4 * tan2;
        let sec_lat = 1.0 / cos_lat;

        let nu = a * self.scale / (1.0 - e2 * sin_lat * sin_lat).sqrt();
        let rho = a * self.scale * (1.0 - e2) / (1.0 - e2 * sin_lat * sin_lat).powf(1.5);
        let eta2 = nu / rho - 1.0;

        let nu3 = nu.powi(3);
        let nu5 = nu.powi(5);
        let nu7 = nu.powi(7);

        let vii = tan_lat / (2.0 * rho * nu);
        let viii = tan_lat / (24.0 * rho * nu3) * (5.0 + 3.0 * tan2 + eta2 - 9.0 * tan2 * eta2);
        let ix = tan_lat / (720.0 * rho * nu5) * (61.0 + 90.0 * tan2 + 45.0 * tan4);
        let x = sec_lat / nu;
        let xi = sec_lat / (6.0 * nu3) * (nu / rho + 2.0 * tan2);
        let xii = sec_lat / (120.0 * nu5) * (5.0 + 28.0 * tan2 + 24.0 * tan4);
        let xiia =
            sec_lat / (5040.0 * nu7) * (61.0 + 662.0 * tan2 + 1320.0 * tan4 + 720.0 * tan6);

        let de = easting - self.false_easting;
        let de2 = de * de;

        let lat_out = lat - vii * de2 + viii * de2 * de2 - ix * de2 * de2 * de2;
        let lon_out = self.lon0 + x * de - xi * de * de2 + xii * de * de2 * de2
            - xiia * de * de2 * de2 * de2;

        (lat_out.to_degrees(), lon_out.to_degrees())
    }
}
