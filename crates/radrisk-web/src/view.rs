//! Page view description.
//!
//! [`render_page`] turns immutable site configuration into everything the
//! template needs. It has no side effects, so the same config always yields
//! the same page.

use radrisk_common::calculator::{MAX_FLIGHTS, MAX_XRAYS};
use radrisk_common::{generate_curves, CalculatorInput, RiskModel, RADIATION_SOURCES};
use radrisk_config::SiteConfig;
use serde::Serialize;

use crate::callbacks::{DOSE_OUTPUT, FLIGHTS_INPUT, XRAYS_INPUT};
use crate::chart;

#[derive(Debug, Clone, Serialize)]
pub struct PageView {
    pub title: String,
    pub sections: Vec<Section>,
    pub source_chart: String,
    pub curve_chart: String,
    pub models: Vec<ModelNote>,
    pub calculator: CalculatorView,
    pub faq: Vec<FaqEntry>,
    pub references: Vec<Reference>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Section {
    pub heading: &'static str,
    pub paragraphs: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ModelNote {
    pub id: &'static str,
    pub name: &'static str,
    pub color: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SliderView {
    pub id: &'static str,
    pub label: &'static str,
    pub min: u32,
    pub max: u32,
    pub value: u32,
    pub marks: Vec<u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CalculatorView {
    pub output_id: &'static str,
    pub sliders: Vec<SliderView>,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Reference {
    pub title: &'static str,
    pub url: &'static str,
}

pub fn render_page(site: &SiteConfig) -> PageView {
    let curves = generate_curves(&site.models, site.hormesis);
    let models = curves
        .series
        .iter()
        .map(|s| ModelNote {
            id: s.model.id(),
            name: s.name,
            color: chart::model_color(s.model),
            description: model_description(s.model),
        })
        .collect();

    PageView {
        title: site.title.clone(),
        sections: intro_sections(),
        source_chart: chart::bar_chart(&RADIATION_SOURCES),
        curve_chart: chart::line_chart(&curves),
        models,
        calculator: calculator_view(CalculatorInput::default()),
        faq: faq(),
        references: references(),
    }
}

fn calculator_view(initial: CalculatorInput) -> CalculatorView {
    CalculatorView {
        output_id: DOSE_OUTPUT,
        sliders: vec![
            SliderView {
                id: FLIGHTS_INPUT,
                label: "Flights per year",
                min: 0,
                max: MAX_FLIGHTS,
                value: initial.flights,
                marks: (0..=MAX_FLIGHTS).step_by(10).collect(),
            },
            SliderView {
                id: XRAYS_INPUT,
                label: "Chest X-rays per year",
                min: 0,
                max: MAX_XRAYS,
                value: initial.xrays,
                marks: (0..=MAX_XRAYS).step_by(2).collect(),
            },
        ],
        message: initial.message(),
    }
}

fn model_description(model: RiskModel) -> &'static str {
    match model {
        RiskModel::Lnt => {
            "Every increment of dose adds proportional risk, with no safe level. \
             This is the model most regulators use for radiation protection."
        }
        RiskModel::Threshold => {
            "Doses below a cutoff (here 10 mSv) carry no added risk; above it, \
             risk rises linearly."
        }
        RiskModel::Hormesis => {
            "Low doses may stimulate repair mechanisms and lower risk slightly, \
             while higher doses are harmful."
        }
    }
}

fn intro_sections() -> Vec<Section> {
    vec![
        Section {
            heading: "What is ionizing radiation?",
            paragraphs: vec![
                "Ionizing radiation carries enough energy to remove electrons from atoms. \
                 It comes from natural sources such as radon, cosmic rays and the food we eat, \
                 and from medical imaging and industry.",
            ],
        },
        Section {
            heading: "Measuring dose",
            paragraphs: vec![
                "Effective dose is measured in millisieverts (mSv), which weight the energy \
                 absorbed by the sensitivity of each tissue. The average person receives \
                 around 3 mSv a year from natural background radiation.",
            ],
        },
        Section {
            heading: "How risky is low-dose radiation?",
            paragraphs: vec![
                "Health effects at high doses are well established. Below about 100 mSv the \
                 data are sparse, and scientists rely on models to extrapolate. The chart \
                 below compares the most common ones.",
            ],
        },
    ]
}

fn faq() -> Vec<FaqEntry> {
    vec![
        FaqEntry {
            question: "Is any amount of radiation safe?",
            answer: "Under the LNT model no dose is entirely risk-free, but the added risk \
                     from everyday sources is very small compared with other hazards.",
        },
        FaqEntry {
            question: "Why does a flight expose me to radiation?",
            answer: "At cruising altitude there is less atmosphere to shield you from cosmic \
                     rays, so dose rates are higher than on the ground.",
        },
        FaqEntry {
            question: "Should I avoid medical imaging?",
            answer: "Medical scans are justified when the diagnostic benefit outweighs the \
                     small radiation risk. Discuss concerns with your doctor.",
        },
    ]
}

fn references() -> Vec<Reference> {
    vec![
        Reference {
            title: "U.S. NRC: Doses in Our Daily Lives",
            url: "https://www.nrc.gov/about-nrc/radiation/around-us/doses-daily-lives.html",
        },
        Reference {
            title: "WHO: Ionizing radiation and health effects",
            url: "https://www.who.int/news-room/fact-sheets/detail/ionizing-radiation-and-health-effects",
        },
        Reference {
            title: "BEIR VII: Health Risks from Exposure to Low Levels of Ionizing Radiation",
            url: "https://nap.nationalacademies.org/catalog/11340",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use radrisk_common::HormesisVariant;

    #[test]
    fn test_default_page() {
        let page = render_page(&SiteConfig::default());
        assert_eq!(page.title, "Understanding Radiation Risk");
        assert_eq!(page.models.len(), 3);
        assert_eq!(page.calculator.output_id, "dose-output");
        assert_eq!(page.calculator.message, "Your estimated annual dose from these sources is 0.00 mSv.");
        let ids: Vec<&str> = page.calculator.sliders.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["flights-slider", "xray-slider"]);
        assert_eq!(page.calculator.sliders[0].max, 50);
        assert_eq!(page.calculator.sliders[1].marks, vec![0, 2, 4, 6, 8, 10]);
    }

    #[test]
    fn test_model_selection_follows_config() {
        let site = SiteConfig {
            models: vec![RiskModel::Threshold],
            hormesis: HormesisVariant::Piecewise,
            ..SiteConfig::default()
        };
        let page = render_page(&site);
        assert_eq!(page.models.len(), 1);
        assert_eq!(page.models[0].id, "threshold");
        assert_eq!(page.curve_chart.matches("<polyline").count(), 1);
    }

    #[test]
    fn test_render_is_pure() {
        let site = SiteConfig::default();
        let a = serde_json::to_value(render_page(&site)).unwrap();
        let b = serde_json::to_value(render_page(&site)).unwrap();
        assert_eq!(a, b);
    }
}
