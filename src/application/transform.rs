// Transformers from raw vendor payloads to normalized points
use crate::domain::error::DomainError;
use crate::domain::granularity::interval_duration;
use crate::domain::solaredge::{EnergyResponse, PowerResponse, Sample, TimeFrameEnergyResponse};
use crate::domain::telemetry::Point;
use crate::domain::time::vendor_timestamp_to_utc;
use chrono::TimeDelta;

/// Instantaneous power, one point per reported sample.
///
/// Rules:
/// - samples with a null value are dropped, never written as zero;
/// - wattage is passed through unchanged;
/// - input order is kept.
pub fn transform_power(response: &PowerResponse) -> Result<Vec<Point>, DomainError> {
    response
        .power
        .values
        .iter()
        .filter_map(|sample| sample.value.map(|value| (sample, value)))
        .map(|(sample, value)| Ok(Point::new(vendor_timestamp_to_utc(&sample.date)?, value)))
        .collect()
}

/// Lifetime energy, reconstructed from the range's starting reading and the interval deltas.
///
/// The granularity is the one the vendor reports in the energy payload. The
/// end-of-range lifetime reading is ignored.
pub fn transform_energy(
    time_frame: &TimeFrameEnergyResponse,
    energy: &EnergyResponse,
) -> Result<Vec<Point>, DomainError> {
    let interval = interval_duration(&energy.energy.time_unit)?;
    reconstruct_lifetime_energy(
        time_frame.time_frame_energy.start_lifetime_energy.energy,
        &energy.energy.values,
        interval,
    )
}

/// Accumulate interval deltas on top of `start` and stamp each total at the end of its interval.
///
/// Samples must be in chronological order. A null delta neither advances the
/// counter nor produces a point.
pub fn reconstruct_lifetime_energy(
    start: f64,
    deltas: &[Sample],
    interval: TimeDelta,
) -> Result<Vec<Point>, DomainError> {
    let mut lifetime_energy = start;
    let mut points = Vec::with_capacity(deltas.len());

    for sample in deltas {
        let Some(delta) = sample.value else {
            continue;
        };
        lifetime_energy += delta;
        let interval_end = vendor_timestamp_to_utc(&sample.date)? + interval;
        points.push(Point::new(interval_end, lifetime_energy));
    }

    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::granularity::Granularity;
    use crate::domain::solaredge::{LifetimeEnergy, Series, TimeFrameEnergy};
    use chrono::{DateTime, Utc};

    fn utc(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    fn sample(date: &str, value: Option<f64>) -> Sample {
        Sample {
            date: date.to_string(),
            value,
        }
    }

    fn series(time_unit: &str, values: Vec<Sample>) -> Series {
        Series {
            time_unit: time_unit.to_string(),
            unit: "Wh".to_string(),
            values,
        }
    }

    fn time_frame(start: f64, end: f64) -> TimeFrameEnergyResponse {
        TimeFrameEnergyResponse {
            time_frame_energy: TimeFrameEnergy {
                energy: end - start,
                unit: "Wh".to_string(),
                start_lifetime_energy: LifetimeEnergy {
                    date: "2023-06-01".to_string(),
                    energy: start,
                    unit: "Wh".to_string(),
                },
                end_lifetime_energy: LifetimeEnergy {
                    date: "2023-06-04".to_string(),
                    energy: end,
                    unit: "Wh".to_string(),
                },
            },
        }
    }

    #[test]
    fn test_power_drops_null_samples() {
        let response = PowerResponse {
            power: series(
                "QUARTER_OF_AN_HOUR",
                vec![
                    sample("2023-06-01 10:00:00", Some(150.0)),
                    sample("2023-06-01 10:15:00", None),
                    sample("2023-06-01 10:30:00", Some(200.0)),
                ],
            ),
        };

        let points = transform_power(&response).unwrap();

        assert_eq!(
            points,
            vec![
                Point::new(utc("2023-06-01T08:00:00Z"), 150.0),
                Point::new(utc("2023-06-01T08:30:00Z"), 200.0),
            ]
        );
    }

    #[test]
    fn test_power_keeps_zero_values() {
        let response = PowerResponse {
            power: series("QUARTER_OF_AN_HOUR", vec![sample("2023-01-10 06:00:00", Some(0.0))]),
        };
        assert_eq!(
            transform_power(&response).unwrap(),
            vec![Point::new(utc("2023-01-10T05:00:00Z"), 0.0)]
        );
    }

    #[test]
    fn test_power_rejects_malformed_date() {
        let response = PowerResponse {
            power: series("QUARTER_OF_AN_HOUR", vec![sample("10:00", Some(1.0))]),
        };
        assert_eq!(
            transform_power(&response),
            Err(DomainError::MalformedTimestamp("10:00".to_string()))
        );
    }

    #[test]
    fn test_energy_skips_null_interval() {
        let deltas = vec![
            sample("2023-06-01", Some(5.0)),
            sample("2023-06-02", None),
            sample("2023-06-03", Some(3.0)),
        ];

        let points = reconstruct_lifetime_energy(1000.0, &deltas, Granularity::Day.interval()).unwrap();

        assert_eq!(
            points,
            vec![
                Point::new(utc("2023-06-01T22:00:00Z"), 1005.0),
                Point::new(utc("2023-06-03T22:00:00Z"), 1008.0),
            ]
        );
    }

    #[test]
    fn test_energy_leading_null_keeps_seed() {
        let deltas = vec![
            sample("2023-06-01 10:00:00", None),
            sample("2023-06-01 11:00:00", Some(250.0)),
        ];

        let points = reconstruct_lifetime_energy(1000.0, &deltas, Granularity::Hour.interval()).unwrap();

        assert_eq!(points, vec![Point::new(utc("2023-06-01T10:00:00Z"), 1250.0)]);
    }

    #[test]
    fn test_energy_points_mark_interval_end() {
        let deltas = vec![
            sample("2023-06-01 10:00:00", Some(10.0)),
            sample("2023-06-01 10:15:00", Some(20.0)),
        ];

        let points =
            reconstruct_lifetime_energy(0.0, &deltas, Granularity::QuarterOfAnHour.interval()).unwrap();

        assert_eq!(points[0].timestamp, utc("2023-06-01T08:15:00Z"));
        assert_eq!(points[1].timestamp, utc("2023-06-01T08:30:00Z"));
        assert_eq!(points[1].value, 30.0);
    }

    #[test]
    fn test_energy_week_offset() {
        let deltas = vec![sample("2023-01-02 00:00:00", Some(7.0))];
        let points = reconstruct_lifetime_energy(0.0, &deltas, Granularity::Week.interval()).unwrap();
        assert_eq!(points, vec![Point::new(utc("2023-01-08T23:00:00Z"), 7.0)]);
    }

    #[test]
    fn test_energy_uses_reported_time_unit() {
        let energy = EnergyResponse {
            energy: series("HOUR", vec![sample("2023-06-01 10:00:00", Some(1.0))]),
        };

        let points = transform_energy(&time_frame(100.0, 100.0), &energy).unwrap();

        assert_eq!(points, vec![Point::new(utc("2023-06-01T09:00:00Z"), 101.0)]);
    }

    #[test]
    fn test_energy_ignores_end_lifetime_energy() {
        let energy = EnergyResponse {
            energy: series("DAY", vec![sample("2023-06-01 00:00:00", Some(5.0))]),
        };

        let points = transform_energy(&time_frame(1000.0, 123_456.0), &energy).unwrap();

        assert_eq!(points.last().map(|p| p.value), Some(1005.0));
    }

    #[test]
    fn test_energy_rejects_unknown_time_unit() {
        let energy = EnergyResponse {
            energy: series("MONTH", vec![sample("2023-06-01 00:00:00", Some(5.0))]),
        };
        assert_eq!(
            transform_energy(&time_frame(0.0, 0.0), &energy),
            Err(DomainError::UnsupportedGranularity("MONTH".to_string()))
        );
    }

    #[test]
    fn test_energy_is_repeatable() {
        let energy = EnergyResponse {
            energy: series(
                "DAY",
                vec![
                    sample("2023-06-01 00:00:00", Some(5.5)),
                    sample("2023-06-02 00:00:00", None),
                    sample("2023-06-03 00:00:00", Some(0.25)),
                ],
            ),
        };
        let time_frame = time_frame(1000.0, 1005.75);

        let first = transform_energy(&time_frame, &energy).unwrap();
        let second = transform_energy(&time_frame, &energy).unwrap();

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.timestamp, b.timestamp);
            assert_eq!(a.value.to_bits(), b.value.to_bits());
        }
    }
}
