//! CF-style time axis decoding.
//!
//! NOAA anomaly files store time as numeric offsets from an epoch declared
//! in the coordinate's `units` attribute, e.g. `"days since 1800-01-01"`.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{DatasetError, DatasetResult};

/// Supported offset scales in a time `units` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeScale {
    Seconds,
    Hours,
    Days,
}

impl TimeScale {
    /// Seconds per unit of this scale.
    fn seconds(self) -> f64 {
        match self {
            TimeScale::Seconds => 1.0,
            TimeScale::Hours => 3_600.0,
            TimeScale::Days => 86_400.0,
        }
    }
}

/// Parse a CF time `units` attribute into its scale and epoch.
///
/// Accepts `"<scale> since <date> [<time>]"` with scale `seconds`, `hours`
/// or `days` (singular forms too), date as `YYYY-MM-DD` and an optional
/// `HH:MM:SS` or `HH:MM` time-of-day.
pub fn parse_time_units(units: &str) -> DatasetResult<(TimeScale, NaiveDateTime)> {
    let lower = units.to_lowercase();
    let parts: Vec<&str> = lower.split_whitespace().collect();

    let (scale_word, rest) = match parts.as_slice() {
        [scale, "since", rest @ ..] if !rest.is_empty() => (*scale, rest),
        _ => {
            return Err(DatasetError::InvalidFormat(format!(
                "unsupported time units: '{}'",
                units
            )))
        }
    };

    let scale = match scale_word {
        "second" | "seconds" => TimeScale::Seconds,
        "hour" | "hours" => TimeScale::Hours,
        "day" | "days" => TimeScale::Days,
        other => {
            return Err(DatasetError::InvalidFormat(format!(
                "unsupported time scale: '{}'",
                other
            )))
        }
    };

    let date = NaiveDate::parse_from_str(rest[0], "%Y-%m-%d").map_err(|_| {
        DatasetError::InvalidFormat(format!("unparseable epoch date in units: '{}'", units))
    })?;

    let time = match rest.get(1) {
        None => NaiveTime::default(),
        Some(t) => NaiveTime::parse_from_str(t, "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M"))
            .map_err(|_| {
                DatasetError::InvalidFormat(format!(
                    "unparseable epoch time in units: '{}'",
                    units
                ))
            })?,
    };

    Ok((scale, date.and_time(time)))
}

/// Decode raw time-coordinate values into calendar dates.
///
/// Each value is an offset from the epoch in the given units; fractional
/// offsets resolve to the second. The returned date is the calendar day the
/// offset lands on, which for monthly data is a day within the sample's
/// month.
pub fn decode_time_axis(values: &[f64], units: &str) -> DatasetResult<Vec<NaiveDate>> {
    let (scale, epoch) = parse_time_units(units)?;

    values
        .iter()
        .map(|&v| {
            if !v.is_finite() {
                return Err(DatasetError::InvalidFormat(format!(
                    "non-finite time coordinate value: {}",
                    v
                )));
            }
            let seconds = v * scale.seconds();
            Ok((epoch + Duration::seconds(seconds as i64)).date())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_days_since() {
        let (scale, epoch) = parse_time_units("days since 1800-01-01").unwrap();
        assert_eq!(scale, TimeScale::Days);
        assert_eq!(epoch.date(), NaiveDate::from_ymd_opt(1800, 1, 1).unwrap());
    }

    #[test]
    fn test_parse_with_time_of_day() {
        let (_, epoch) = parse_time_units("hours since 1900-01-01 12:00:00").unwrap();
        assert_eq!(
            epoch,
            NaiveDate::from_ymd_opt(1900, 1, 1)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap()
        );
    }

    #[test]
    fn test_parse_rejects_unknown_scale() {
        assert!(parse_time_units("fortnights since 1800-01-01").is_err());
        assert!(parse_time_units("days until 1800-01-01").is_err());
        assert!(parse_time_units("days since").is_err());
    }

    #[test]
    fn test_decode_days_offsets() {
        let dates = decode_time_axis(&[0.0, 31.0, 59.0], "days since 1880-01-01").unwrap();
        assert_eq!(dates[0], NaiveDate::from_ymd_opt(1880, 1, 1).unwrap());
        assert_eq!(dates[1], NaiveDate::from_ymd_opt(1880, 2, 1).unwrap());
        // 1880 is a leap year, so day 59 is still February.
        assert_eq!(dates[2], NaiveDate::from_ymd_opt(1880, 2, 29).unwrap());
    }

    #[test]
    fn test_decode_fractional_days() {
        let dates = decode_time_axis(&[15.5], "days since 1880-01-01").unwrap();
        assert_eq!(dates[0], NaiveDate::from_ymd_opt(1880, 1, 16).unwrap());
    }

    #[test]
    fn test_decode_rejects_non_finite() {
        assert!(decode_time_axis(&[f64::NAN], "days since 1880-01-01").is_err());
    }
}
