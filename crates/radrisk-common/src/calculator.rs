//! Annual dose calculator for flights and chest X-rays.

use serde::Serialize;

use crate::error::{RadRiskError, Result};

/// Dose per flight in mSv.
pub const FLIGHT_DOSE_MSV: f64 = 0.04;
/// Dose per chest X-ray in mSv.
pub const XRAY_DOSE_MSV: f64 = 0.1;

pub const MAX_FLIGHTS: u32 = 50;
pub const MAX_XRAYS: u32 = 10;

/// Estimated annual dose in mSv, rounded to two decimal places.
pub fn estimate(flights: u32, xrays: u32) -> f64 {
    let raw = flights as f64 * FLIGHT_DOSE_MSV + xrays as f64 * XRAY_DOSE_MSV;
    round2(raw)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn format_estimate(dose_msv: f64) -> String {
    format!("Your estimated annual dose from these sources is {:.2} mSv.", dose_msv)
}

/// Slider values, checked against the slider bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CalculatorInput {
    pub flights: u32,
    pub xrays: u32,
}

impl CalculatorInput {
    pub fn new(flights: i64, xrays: i64) -> Result<Self> {
        Ok(Self {
            flights: bounded("flights", flights, MAX_FLIGHTS)?,
            xrays: bounded("xrays", xrays, MAX_XRAYS)?,
        })
    }

    pub fn estimate(&self) -> f64 {
        estimate(self.flights, self.xrays)
    }

    pub fn message(&self) -> String {
        format_estimate(self.estimate())
    }
}

fn bounded(field: &'static str, value: i64, max: u32) -> Result<u32> {
    if (0..=max as i64).contains(&value) {
        Ok(value as u32)
    } else {
        Err(RadRiskError::OutOfRange { field, value, min: 0, max: max as i64 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_points() {
        assert_eq!(estimate(0, 0), 0.0);
        assert_eq!(estimate(5, 1), 0.3);
        assert_eq!(estimate(50, 10), 3.0);
    }

    #[test]
    fn test_whole_grid_matches_rounded_sum() {
        for f in 0..=MAX_FLIGHTS {
            for x in 0..=MAX_XRAYS {
                let expected = ((f as f64 * 0.04 + x as f64 * 0.1) * 100.0).round() / 100.0;
                assert_eq!(estimate(f, x), expected, "flights={f} xrays={x}");
            }
        }
    }

    #[test]
    fn test_message_two_decimals() {
        assert_eq!(
            format_estimate(estimate(5, 1)),
            "Your estimated annual dose from these sources is 0.30 mSv."
        );
        assert_eq!(
            CalculatorInput::default().message(),
            "Your estimated annual dose from these sources is 0.00 mSv."
        );
    }

    #[test]
    fn test_input_bounds() {
        assert!(CalculatorInput::new(50, 10).is_ok());
        assert_eq!(
            CalculatorInput::new(51, 0),
            Err(RadRiskError::OutOfRange { field: "flights", value: 51, min: 0, max: 50 })
        );
        assert_eq!(
            CalculatorInput::new(0, -1),
            Err(RadRiskError::OutOfRange { field: "xrays", value: -1, min: 0, max: 10 })
        );
    }

    #[test]
    fn test_input_estimate() {
        let input = CalculatorInput::new(25, 4).unwrap();
        assert_eq!(input.estimate(), 1.4);
    }
}
