//! Typical doses from everyday and medical radiation sources.

use serde::Serialize;

/// A named radiation source and its effective dose in millisieverts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RadiationSource {
    pub name: &'static str,
    pub dose_msv: f64,
}

/// The fixed source table shown in the dose comparison chart, smallest first.
pub static RADIATION_SOURCES: [RadiationSource; 8] = [
    RadiationSource { name: "Eating a banana",           dose_msv: 0.0001 },
    RadiationSource { name: "Dental X-ray",              dose_msv: 0.005 },
    RadiationSource { name: "Cross-country flight",      dose_msv: 0.04 },
    RadiationSource { name: "Chest X-ray",               dose_msv: 0.1 },
    RadiationSource { name: "Mammogram",                 dose_msv: 0.4 },
    RadiationSource { name: "Head CT scan",              dose_msv: 2.0 },
    RadiationSource { name: "Annual natural background", dose_msv: 3.0 },
    RadiationSource { name: "Chest CT scan",             dose_msv: 7.0 },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{FLIGHT_DOSE_MSV, XRAY_DOSE_MSV};

    fn dose_of(name: &str) -> Option<f64> {
        RADIATION_SOURCES
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
            .map(|s| s.dose_msv)
    }

    #[test]
    fn test_all_doses_positive() {
        assert!(RADIATION_SOURCES.iter().all(|s| s.dose_msv > 0.0));
    }

    #[test]
    fn test_sorted_ascending() {
        assert!(RADIATION_SOURCES.windows(2).all(|w| w[0].dose_msv <= w[1].dose_msv));
    }

    #[test]
    fn test_calculator_factors_match_table() {
        // The calculator's per-event factors come from these two rows.
        assert_eq!(dose_of("cross-country flight"), Some(FLIGHT_DOSE_MSV));
        assert_eq!(dose_of("Chest X-ray"), Some(XRAY_DOSE_MSV));
        assert!(dose_of("Microwave").is_none());
    }
}
