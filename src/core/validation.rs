//! Explicit bounds checks applied before rows are written.
//!
//! Every decimal column has a declared `(precision, scale)`. A value fits when
//! it is finite, its integer part has at most `precision - scale` digits and it
//! has no more than `scale` fractional digits. Values that do not fit are
//! rejected rather than silently rounded by the engine.

use crate::config::species::SpeciesSeed;
use crate::errors::{Error, Result};

/// Precision and scale of a decimal column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimalSpec {
    /// Total number of digits
    pub precision: u32,
    /// Digits after the decimal point
    pub scale: u32,
}

/// Fish sizes, catch length and weight: decimal(5,2)
pub const SIZE: DecimalSpec = DecimalSpec {
    precision: 5,
    scale: 2,
};
/// Latitude: decimal(10,8)
pub const LATITUDE: DecimalSpec = DecimalSpec {
    precision: 10,
    scale: 8,
};
/// Longitude: decimal(11,8)
pub const LONGITUDE: DecimalSpec = DecimalSpec {
    precision: 11,
    scale: 8,
};
/// Barometric pressure on a session: decimal(6,2)
pub const SESSION_PRESSURE: DecimalSpec = DecimalSpec {
    precision: 6,
    scale: 2,
};
/// Barometric pressure on a catch: decimal(7,2)
pub const CATCH_PRESSURE: DecimalSpec = DecimalSpec {
    precision: 7,
    scale: 2,
};

/// Invoice amounts: decimal(10,2)
pub const AMOUNT: DecimalSpec = DecimalSpec {
    precision: 10,
    scale: 2,
};

/// Checks that `value` is representable in a column of the given spec.
pub fn check_decimal(field: &'static str, value: f64, spec: DecimalSpec) -> Result<()> {
    if !value.is_finite() {
        return Err(Error::validation(field, "must be a finite number"));
    }

    let limit = 10f64.powi(i32::try_from(spec.precision - spec.scale).unwrap_or(i32::MAX));
    if value.abs() >= limit {
        return Err(Error::validation(
            field,
            format!(
                "{value} does not fit decimal({}, {})",
                spec.precision, spec.scale
            ),
        ));
    }

    let scaled = value * 10f64.powi(i32::try_from(spec.scale).unwrap_or(i32::MAX));
    let tolerance = f64::EPSILON * 16.0 * scaled.abs().max(1.0);
    if (scaled - scaled.round()).abs() > tolerance {
        return Err(Error::validation(
            field,
            format!("{value} has more than {} decimal places", spec.scale),
        ));
    }

    Ok(())
}

/// Checks an optional non-negative measurement against its decimal spec.
pub fn check_measurement(field: &'static str, value: Option<f64>, spec: DecimalSpec) -> Result<()> {
    let Some(value) = value else {
        return Ok(());
    };
    if value < 0.0 {
        return Err(Error::validation(field, "cannot be negative"));
    }
    check_decimal(field, value, spec)
}

/// Checks that `month` is within 1-12.
pub fn check_month(field: &'static str, month: i32) -> Result<()> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err(Error::validation(field, format!("{month} is not a month (1-12)")))
    }
}

/// Checks that `value` has a non-whitespace character.
pub fn check_not_blank(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        Err(Error::validation(field, "cannot be empty"))
    } else {
        Ok(())
    }
}

/// Validates an optional coordinate pair. Both or neither must be given.
pub fn check_coordinates(latitude: Option<f64>, longitude: Option<f64>) -> Result<()> {
    match (latitude, longitude) {
        (None, None) => Ok(()),
        (Some(lat), Some(long)) => {
            check_decimal("latitude", lat, LATITUDE)?;
            check_decimal("longitude", long, LONGITUDE)?;
            if !(-90.0..=90.0).contains(&lat) {
                return Err(Error::validation("latitude", "must be between -90 and 90"));
            }
            if !(-180.0..=180.0).contains(&long) {
                return Err(Error::validation(
                    "longitude",
                    "must be between -180 and 180",
                ));
            }
            Ok(())
        }
        _ => Err(Error::validation(
            "latitude",
            "latitude and longitude must be given together",
        )),
    }
}

/// Validates one species reference row.
pub fn validate_species(species: &SpeciesSeed) -> Result<()> {
    check_not_blank("common_name", &species.common_name)?;
    check_measurement("min_size", species.min_size, SIZE)?;
    check_measurement("max_size", species.max_size, SIZE)?;
    if let (Some(min), Some(max)) = (species.min_size, species.max_size) {
        if min > max {
            return Err(Error::validation(
                "min_size",
                format!("{min} is larger than max_size {max}"),
            ));
        }
    }
    if let Some(month) = species.season_start_month {
        check_month("season_start_month", month)?;
    }
    if let Some(month) = species.season_end_month {
        check_month("season_end_month", month)?;
    }
    Ok(())
}
