//! Units of length on the surface of the Earth, see [`Unit`].

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GeometryError;

/// Mean radius of the Earth used by all spherical computations, in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6373.0;

/// Unit of distance measured along the surface of the Earth.
///
/// Angular units ([`Unit::Radians`], [`Unit::Degrees`]) measure the central angle between two points.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Kilometers.
    #[default]
    #[serde(alias = "kilometres")]
    Kilometers,
    /// Meters.
    #[serde(alias = "metres")]
    Meters,
    /// Centimeters.
    #[serde(alias = "centimetres")]
    Centimeters,
    /// Statute miles.
    Miles,
    /// Nautical miles.
    NauticalMiles,
    /// Inches.
    Inches,
    /// Yards.
    Yards,
    /// Feet.
    Feet,
    /// Central angle in radians.
    Radians,
    /// Central angle in degrees.
    Degrees,
}

impl Unit {
    /// All supported units.
    pub const ALL: [Unit; 10] = [
        Unit::Kilometers,
        Unit::Meters,
        Unit::Centimeters,
        Unit::Miles,
        Unit::NauticalMiles,
        Unit::Inches,
        Unit::Yards,
        Unit::Feet,
        Unit::Radians,
        Unit::Degrees,
    ];

    /// Length of one radian of a great circle in this unit.
    pub fn factor(&self) -> f64 {
        match self {
            Unit::Kilometers => EARTH_RADIUS_KM,
            Unit::Meters => 6_373_000.0,
            Unit::Centimeters => 6.373e8,
            Unit::Miles => 3960.0,
            Unit::NauticalMiles => 3441.145,
            Unit::Inches => 250_905_600.0,
            Unit::Yards => 6_969_600.0,
            Unit::Feet => 20_908_792.65,
            Unit::Radians => 1.0,
            Unit::Degrees => 57.2957795,
        }
    }

    /// Canonical name of the unit, as accepted by [`Unit::from_str`].
    pub fn name(&self) -> &'static str {
        match self {
            Unit::Kilometers => "kilometers",
            Unit::Meters => "meters",
            Unit::Centimeters => "centimeters",
            Unit::Miles => "miles",
            Unit::NauticalMiles => "nauticalmiles",
            Unit::Inches => "inches",
            Unit::Yards => "yards",
            Unit::Feet => "feet",
            Unit::Radians => "radians",
            Unit::Degrees => "degrees",
        }
    }

    /// Converts a central angle in radians into a distance in this unit.
    pub fn radians_to_length(&self, radians: f64) -> f64 {
        radians * self.factor()
    }

    /// Converts a distance in this unit into a central angle in radians.
    pub fn length_to_radians(&self, distance: f64) -> f64 {
        distance / self.factor()
    }

    /// Converts a distance in this unit into a central angle in degrees.
    pub fn length_to_degrees(&self, distance: f64) -> f64 {
        radians_to_degrees(self.length_to_radians(distance))
    }

    /// Converts a distance in this unit into the `target` unit.
    pub fn convert(&self, distance: f64, target: Unit) -> f64 {
        target.radians_to_length(self.length_to_radians(distance))
    }
}

/// Converts an angle to radians, wrapping it to one full turn first.
pub fn degrees_to_radians(degrees: f64) -> f64 {
    (degrees % 360.0).to_radians()
}

/// Converts an angle to degrees, wrapping it to one full turn first.
pub fn radians_to_degrees(radians: f64) -> f64 {
    (radians % std::f64::consts::TAU).to_degrees()
}

impl Display for Unit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Unit {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "kilometers" | "kilometres" => Unit::Kilometers,
            "meters" | "metres" => Unit::Meters,
            "centimeters" | "centimetres" => Unit::Centimeters,
            "miles" => Unit::Miles,
            "nauticalmiles" => Unit::NauticalMiles,
            "inches" => Unit::Inches,
            "yards" => Unit::Yards,
            "feet" => Unit::Feet,
            "radians" => Unit::Radians,
            "degrees" => Unit::Degrees,
            other => return Err(GeometryError::InvalidUnit(other.to_string())),
        })
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn parse_names() {
        for unit in Unit::ALL {
            assert_eq!(unit.name().parse::<Unit>(), Ok(unit));
        }

        assert_eq!("kilometres".parse::<Unit>(), Ok(Unit::Kilometers));
        assert_eq!("metres".parse::<Unit>(), Ok(Unit::Meters));
        assert_eq!("centimetres".parse::<Unit>(), Ok(Unit::Centimeters));
    }

    #[test]
    fn parse_invalid_unit() {
        assert_matches!("blah".parse::<Unit>(), Err(GeometryError::InvalidUnit(name)) if name == "blah");
        assert_matches!("Miles".parse::<Unit>(), Err(GeometryError::InvalidUnit(_)));
    }

    #[test]
    fn default_is_kilometers() {
        assert_eq!(Unit::default(), Unit::Kilometers);
    }

    #[test]
    fn conversions() {
        assert_relative_eq!(Unit::Kilometers.convert(1.0, Unit::Meters), 1000.0);
        assert_relative_eq!(Unit::Miles.convert(1.0, Unit::Kilometers), 6373.0 / 3960.0);
        assert_relative_eq!(Unit::Radians.radians_to_length(1.0), 1.0);
        assert_relative_eq!(Unit::Kilometers.length_to_radians(6373.0), 1.0);
        assert_relative_eq!(
            Unit::Radians.length_to_degrees(std::f64::consts::PI / 2.0),
            90.0
        );
        assert_relative_eq!(degrees_to_radians(450.0), std::f64::consts::FRAC_PI_2);
    }

    #[test]
    fn serde_names() {
        assert_eq!(
            serde_json::to_string(&Unit::NauticalMiles).unwrap(),
            r#""nauticalmiles""#
        );
        assert_eq!(
            serde_json::from_str::<Unit>(r#""metres""#).unwrap(),
            Unit::Meters
        );
        assert!(serde_json::from_str::<Unit>(r#""blah""#).is_err());
    }
}
