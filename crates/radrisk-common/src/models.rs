//! Dose-response risk models and curve sampling.
//!
//! All three models are expressed as relative risk against dose in mSv,
//! sampled over a fixed axis of [`SAMPLE_COUNT`] points spanning
//! [`MIN_DOSE`, `MAX_DOSE`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::RadRiskError;

pub const MIN_DOSE: f64 = 0.0;
pub const MAX_DOSE: f64 = 100.0;
pub const SAMPLE_COUNT: usize = 100;

/// Risk per mSv above the cutoff (and everywhere for LNT).
pub const RISK_PER_MSV: f64 = 0.01;
/// Dose below which the threshold model assigns zero risk.
pub const THRESHOLD_DOSE: f64 = 10.0;

/// A dose-response model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskModel {
    Lnt,
    Threshold,
    Hormesis,
}

impl RiskModel {
    pub const ALL: [RiskModel; 3] = [RiskModel::Lnt, RiskModel::Threshold, RiskModel::Hormesis];

    pub fn id(self) -> &'static str {
        match self {
            RiskModel::Lnt       => "lnt",
            RiskModel::Threshold => "threshold",
            RiskModel::Hormesis  => "hormesis",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            RiskModel::Lnt       => "Linear No-Threshold (LNT)",
            RiskModel::Threshold => "Threshold",
            RiskModel::Hormesis  => "Hormesis",
        }
    }

    /// Relative risk at `dose` mSv.
    pub fn risk(self, dose: f64, hormesis: HormesisVariant) -> f64 {
        match self {
            RiskModel::Lnt => dose * RISK_PER_MSV,
            RiskModel::Threshold => above_threshold(dose),
            RiskModel::Hormesis => hormesis.risk(dose),
        }
    }
}

impl fmt::Display for RiskModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for RiskModel {
    type Err = RadRiskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lnt" | "linear" => Ok(RiskModel::Lnt),
            "threshold"      => Ok(RiskModel::Threshold),
            "hormesis"       => Ok(RiskModel::Hormesis),
            other            => Err(RadRiskError::UnknownModel(other.to_string())),
        }
    }
}

/// The two hormesis formulations in circulation.
///
/// `Piecewise` declines linearly from 0.05 to zero below the cutoff and then
/// follows the threshold line. `Exponential` is a smooth curve that dips
/// below zero at low dose and grows at half the LNT slope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HormesisVariant {
    Piecewise,
    #[default]
    Exponential,
}

impl HormesisVariant {
    pub fn risk(self, dose: f64) -> f64 {
        match self {
            HormesisVariant::Piecewise => {
                if dose < THRESHOLD_DOSE {
                    -0.005 * dose + 0.05
                } else {
                    (dose - THRESHOLD_DOSE) * RISK_PER_MSV
                }
            }
            HormesisVariant::Exponential => -0.005 * (-dose / 20.0).exp() + dose * 0.005,
        }
    }
}

impl FromStr for HormesisVariant {
    type Err = RadRiskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "piecewise"   => Ok(HormesisVariant::Piecewise),
            "exponential" => Ok(HormesisVariant::Exponential),
            other         => Err(RadRiskError::UnknownVariant(other.to_string())),
        }
    }
}

fn above_threshold(dose: f64) -> f64 {
    if dose < THRESHOLD_DOSE {
        0.0
    } else {
        (dose - THRESHOLD_DOSE) * RISK_PER_MSV
    }
}

/// Evenly spaced dose axis over [`MIN_DOSE`, `MAX_DOSE`], endpoints inclusive.
pub fn dose_range() -> Vec<f64> {
    linspace(MIN_DOSE, MAX_DOSE, SAMPLE_COUNT)
}

fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => vec![],
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// One model evaluated over the dose axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskSeries {
    pub model: RiskModel,
    pub name: &'static str,
    pub risks: Vec<f64>,
}

/// A single dose point with the risk under each generated model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DoseSample {
    pub dose: f64,
    pub risks: BTreeMap<RiskModel, f64>,
}

/// Dose axis plus one risk series per requested model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurveSet {
    pub doses: Vec<f64>,
    pub hormesis: HormesisVariant,
    pub series: Vec<RiskSeries>,
}

impl CurveSet {
    pub fn get(&self, model: RiskModel) -> Option<&RiskSeries> {
        self.series.iter().find(|s| s.model == model)
    }

    /// Row view: one [`DoseSample`] per point on the dose axis.
    pub fn samples(&self) -> Vec<DoseSample> {
        self.doses
            .iter()
            .enumerate()
            .map(|(i, &dose)| DoseSample {
                dose,
                risks: self.series.iter().map(|s| (s.model, s.risks[i])).collect(),
            })
            .collect()
    }

    /// Smallest and largest risk across all series, `(0.0, 0.0)` when empty.
    pub fn risk_bounds(&self) -> (f64, f64) {
        self.series
            .iter()
            .flat_map(|s| s.risks.iter().copied())
            .fold((0.0, 0.0), |(lo, hi), r| (lo.min(r), hi.max(r)))
    }
}

/// Sample the requested models over the dose axis.
///
/// Series come back in request order; a model requested twice is generated once.
pub fn generate_curves(models: &[RiskModel], hormesis: HormesisVariant) -> CurveSet {
    let doses = dose_range();
    let mut series: Vec<RiskSeries> = Vec::with_capacity(models.len());

    for &model in models {
        if series.iter().any(|s| s.model == model) {
            continue;
        }
        series.push(RiskSeries {
            model,
            name: model.display_name(),
            risks: doses.iter().map(|&d| model.risk(d, hormesis)).collect(),
        });
    }

    tracing::trace!("Generated {} risk series over {} doses", series.len(), doses.len());
    CurveSet { doses, hormesis, series }
}
