//! Core constants, units, and shared primitives for the Worldline workspace.

/// Physical constants. The unit is part of every name.
pub mod constants {
    use std::f64::consts::PI;

    /// Earth's rotation period relative to the fixed stars (s).
    pub const SIDEREAL_DAY_SECONDS: f64 = 86_164.0905;
    /// Mean solar day (s).
    pub const SECONDS_PER_DAY: f64 = 86_400.0;
    /// Julian year of exactly 365.25 days (s).
    pub const JULIAN_YEAR_SECONDS: f64 = 365.25 * SECONDS_PER_DAY;
    /// Average month used for display breakdowns (s).
    pub const AVERAGE_MONTH_SECONDS: f64 = JULIAN_YEAR_SECONDS / 12.0;

    /// WGS84 equatorial radius (m).
    pub const WGS84_SEMI_MAJOR_AXIS_M: f64 = 6_378_137.0;
    /// WGS84 flattening.
    pub const WGS84_FLATTENING: f64 = 1.0 / 298.257_223_563;
    /// WGS84 polar radius (m).
    pub const WGS84_SEMI_MINOR_AXIS_M: f64 = WGS84_SEMI_MAJOR_AXIS_M * (1.0 - WGS84_FLATTENING);
    /// WGS84 first eccentricity squared.
    pub const WGS84_ECCENTRICITY_SQUARED: f64 = WGS84_FLATTENING * (2.0 - WGS84_FLATTENING);

    /// Earth's rotation rate relative to the fixed stars (rad/s).
    pub const EARTH_ANGULAR_VELOCITY_RAD_S: f64 = 2.0 * PI / SIDEREAL_DAY_SECONDS;

    /// Mean heliocentric orbital speed of the Earth (km/s).
    pub const EARTH_ORBITAL_VELOCITY_KMS: f64 = 29.78;
    /// Eccentricity of the Earth's orbit.
    pub const EARTH_ORBITAL_ECCENTRICITY: f64 = 0.016_708_6;

    /// Circular speed of the Sun around the galactic centre (km/s).
    pub const GALACTIC_VELOCITY_KMS: f64 = 220.0;
    /// One-sigma uncertainty on [`GALACTIC_VELOCITY_KMS`] (km/s).
    pub const GALACTIC_VELOCITY_UNCERTAINTY_KMS: f64 = 15.0;
    /// Distance from the Sun to the galactic centre (light-years).
    pub const GALACTIC_CENTER_DISTANCE_LY: f64 = 26_000.0;
    /// Period of the Sun's galactic orbit (years).
    pub const GALACTIC_ORBITAL_PERIOD_YEARS: f64 = 230.0e6;

    /// Solar System Barycenter speed relative to the CMB dipole (km/s).
    pub const CMB_SSB_VELOCITY_KMS: f64 = 369.82;
    /// One-sigma uncertainty on [`CMB_SSB_VELOCITY_KMS`] (km/s).
    pub const CMB_SSB_VELOCITY_UNCERTAINTY_KMS: f64 = 0.11;
    /// Galactic longitude of the SSB dipole apex (deg).
    pub const CMB_SSB_GALACTIC_LONGITUDE_DEG: f64 = 264.021;
    /// Galactic latitude of the SSB dipole apex (deg).
    pub const CMB_SSB_GALACTIC_LATITUDE_DEG: f64 = 48.253;

    /// Local Group speed relative to the CMB rest frame (km/s).
    pub const CMB_LOCAL_GROUP_VELOCITY_KMS: f64 = 620.0;
    /// One-sigma uncertainty on [`CMB_LOCAL_GROUP_VELOCITY_KMS`] (km/s).
    pub const CMB_LOCAL_GROUP_VELOCITY_UNCERTAINTY_KMS: f64 = 15.0;
    /// Galactic longitude of the Local Group apex (deg).
    pub const CMB_LOCAL_GROUP_GALACTIC_LONGITUDE_DEG: f64 = 271.9;
    /// Galactic latitude of the Local Group apex (deg).
    pub const CMB_LOCAL_GROUP_GALACTIC_LATITUDE_DEG: f64 = 29.6;

    /// Speed of light in vacuum (km/s).
    pub const SPEED_OF_LIGHT_KMS: f64 = 299_792.458;
    /// Kilometres per international mile.
    pub const KM_PER_MILE: f64 = 1.609_344;
    /// Kilometres per astronomical unit.
    pub const AU_KM: f64 = 149_597_870.7;
    /// Kilometres per Julian light-year.
    pub const LIGHT_YEAR_KM: f64 = SPEED_OF_LIGHT_KMS * JULIAN_YEAR_SECONDS;
    /// Kilometres per parsec.
    pub const PARSEC_KM: f64 = 3.085_677_581_491_367e13;
}

/// Distance and speed conversions.
pub mod units {
    use serde::{Deserialize, Serialize};

    use super::constants::{AU_KM, KM_PER_MILE, LIGHT_YEAR_KM, PARSEC_KM};

    /// Convert kilometres to metres.
    #[inline]
    pub fn km_to_m(v: f64) -> f64 {
        v * 1_000.0
    }

    /// Convert metres to kilometres.
    #[inline]
    pub fn m_to_km(v: f64) -> f64 {
        v / 1_000.0
    }

    #[inline]
    pub fn km_to_miles(v: f64) -> f64 {
        v / KM_PER_MILE
    }

    #[inline]
    pub fn miles_to_km(v: f64) -> f64 {
        v * KM_PER_MILE
    }

    #[inline]
    pub fn km_to_au(v: f64) -> f64 {
        v / AU_KM
    }

    #[inline]
    pub fn au_to_km(v: f64) -> f64 {
        v * AU_KM
    }

    #[inline]
    pub fn km_to_light_years(v: f64) -> f64 {
        v / LIGHT_YEAR_KM
    }

    #[inline]
    pub fn light_years_to_km(v: f64) -> f64 {
        v * LIGHT_YEAR_KM
    }

    #[inline]
    pub fn km_to_parsecs(v: f64) -> f64 {
        v / PARSEC_KM
    }

    #[inline]
    pub fn parsecs_to_km(v: f64) -> f64 {
        v * PARSEC_KM
    }

    /// Convert metres per second to kilometres per second.
    #[inline]
    pub fn ms_to_kms(v: f64) -> f64 {
        v / 1_000.0
    }

    /// Convert kilometres per second to metres per second.
    #[inline]
    pub fn kms_to_ms(v: f64) -> f64 {
        v * 1_000.0
    }

    #[inline]
    pub fn kms_to_kmh(v: f64) -> f64 {
        v * 3_600.0
    }

    #[inline]
    pub fn kmh_to_kms(v: f64) -> f64 {
        v / 3_600.0
    }

    #[inline]
    pub fn kms_to_mph(v: f64) -> f64 {
        km_to_miles(v) * 3_600.0
    }

    #[inline]
    pub fn mph_to_kms(v: f64) -> f64 {
        miles_to_km(v) / 3_600.0
    }

    /// Display unit for path lengths.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
    #[serde(rename_all = "kebab-case")]
    pub enum DistanceUnit {
        #[default]
        Km,
        Miles,
        Au,
        LightYears,
        Parsecs,
    }

    impl DistanceUnit {
        /// Express a distance given in kilometres in this unit.
        pub fn from_km(self, km: f64) -> f64 {
            match self {
                DistanceUnit::Km => km,
                DistanceUnit::Miles => km_to_miles(km),
                DistanceUnit::Au => km_to_au(km),
                DistanceUnit::LightYears => km_to_light_years(km),
                DistanceUnit::Parsecs => km_to_parsecs(km),
            }
        }

        /// Convert a value in this unit back to kilometres.
        pub fn to_km(self, value: f64) -> f64 {
            match self {
                DistanceUnit::Km => value,
                DistanceUnit::Miles => miles_to_km(value),
                DistanceUnit::Au => au_to_km(value),
                DistanceUnit::LightYears => light_years_to_km(value),
                DistanceUnit::Parsecs => parsecs_to_km(value),
            }
        }

        pub fn symbol(self) -> &'static str {
            match self {
                DistanceUnit::Km => "km",
                DistanceUnit::Miles => "mi",
                DistanceUnit::Au => "AU",
                DistanceUnit::LightYears => "ly",
                DistanceUnit::Parsecs => "pc",
            }
        }
    }

    /// Display unit for speeds.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
    #[serde(rename_all = "kebab-case")]
    pub enum SpeedUnit {
        #[default]
        KmPerSecond,
        KmPerHour,
        MilesPerHour,
        MetersPerSecond,
    }

    impl SpeedUnit {
        /// Express a speed given in km/s in this unit.
        pub fn from_kms(self, kms: f64) -> f64 {
            match self {
                SpeedUnit::KmPerSecond => kms,
                SpeedUnit::KmPerHour => kms_to_kmh(kms),
                SpeedUnit::MilesPerHour => kms_to_mph(kms),
                SpeedUnit::MetersPerSecond => kms_to_ms(kms),
            }
        }

        /// Convert a value in this unit back to km/s.
        pub fn to_kms(self, value: f64) -> f64 {
            match self {
                SpeedUnit::KmPerSecond => value,
                SpeedUnit::KmPerHour => kmh_to_kms(value),
                SpeedUnit::MilesPerHour => mph_to_kms(value),
                SpeedUnit::MetersPerSecond => ms_to_kms(value),
            }
        }

        pub fn symbol(self) -> &'static str {
            match self {
                SpeedUnit::KmPerSecond => "km/s",
                SpeedUnit::KmPerHour => "km/h",
                SpeedUnit::MilesPerHour => "mph",
                SpeedUnit::MetersPerSecond => "m/s",
            }
        }
    }
}

/// Lightweight time utilities shared across crates.
pub mod time {
    use super::constants::{JULIAN_YEAR_SECONDS, SECONDS_PER_DAY};

    /// Convert days to seconds.
    #[inline]
    pub fn days_to_seconds(days: f64) -> f64 {
        days * SECONDS_PER_DAY
    }

    /// Convert seconds to days.
    #[inline]
    pub fn seconds_to_days(seconds: f64) -> f64 {
        seconds / SECONDS_PER_DAY
    }

    /// Convert seconds to Julian years.
    #[inline]
    pub fn seconds_to_julian_years(seconds: f64) -> f64 {
        seconds / JULIAN_YEAR_SECONDS
    }
}

#[cfg(test)]
mod tests {
    use super::constants::*;
    use super::time::*;
    use super::units::*;

    #[test]
    fn derived_wgs84_constants_match_published_values() {
        assert!((WGS84_SEMI_MINOR_AXIS_M - 6_356_752.314_245).abs() < 1e-3);
        assert!((WGS84_ECCENTRICITY_SQUARED - 0.006_694_379_990_14).abs() < 1e-12);
    }

    #[test]
    fn light_year_is_about_63k_au() {
        let ratio = LIGHT_YEAR_KM / AU_KM;
        assert!((ratio - 63_241.077).abs() < 0.01, "ratio = {ratio}");
        assert!((LIGHT_YEAR_KM - 9_460_730_472_580.8).abs() < 1.0);
    }

    #[test]
    fn speed_conversions_agree() {
        assert!((kms_to_kmh(1.0) - 3_600.0).abs() < 1e-12);
        assert!((kms_to_mph(1.0) - 2_236.936_292).abs() < 1e-5);
        assert!((mph_to_kms(kms_to_mph(29.78)) - 29.78).abs() < 1e-12);
        assert!((kms_to_ms(0.465) - 465.0).abs() < 1e-9);
    }

    #[test]
    fn julian_year_in_days() {
        assert_eq!(seconds_to_days(JULIAN_YEAR_SECONDS), 365.25);
        assert_eq!(seconds_to_julian_years(days_to_seconds(365.25 * 4.0)), 4.0);
    }

    #[test]
    fn unit_enums_invert_each_other() {
        for unit in [
            DistanceUnit::Km,
            DistanceUnit::Miles,
            DistanceUnit::Au,
            DistanceUnit::LightYears,
            DistanceUnit::Parsecs,
        ] {
            let km = 1.234e12;
            let back = unit.to_km(unit.from_km(km));
            assert!((back - km).abs() / km < 1e-12, "{unit:?}");
        }
        assert!((DistanceUnit::Parsecs.from_km(PARSEC_KM) - 1.0).abs() < 1e-15);
        assert_eq!(SpeedUnit::MilesPerHour.symbol(), "mph");
    }
}
