//! Inline SVG charts for the page.

use minijinja::HtmlEscape;
use radrisk_common::models::{MAX_DOSE, MIN_DOSE};
use radrisk_common::{CurveSet, RadiationSource, RiskModel};

const WIDTH: f64 = 680.0;

const BAR_ROW: f64 = 34.0;
const BAR_LABEL_W: f64 = 200.0;
const BAR_RIGHT: f64 = 70.0;
const BAR_TOP: f64 = 10.0;
const BAR_AXIS_H: f64 = 30.0;

const LINE_H: f64 = 380.0;
const LINE_LEFT: f64 = 60.0;
const LINE_RIGHT: f64 = 20.0;
const LINE_TOP: f64 = 20.0;
const LINE_BOTTOM: f64 = 50.0;

pub fn model_color(model: RiskModel) -> &'static str {
    match model {
        RiskModel::Lnt       => "#d62728",
        RiskModel::Threshold => "#1f77b4",
        RiskModel::Hormesis  => "#2ca02c",
    }
}

/// Horizontal bar chart of source doses on a log10 mSv axis.
pub fn bar_chart(sources: &[RadiationSource]) -> String {
    let height = BAR_TOP + BAR_ROW * sources.len() as f64 + BAR_AXIS_H;
    let mut svg = svg_open(WIDTH, height, "Radiation dose from common sources");

    let positive: Vec<f64> = sources.iter().map(|s| s.dose_msv).filter(|d| *d > 0.0).collect();
    if positive.is_empty() {
        svg.push_str(&format!(
            r#"<text x="{:.1}" y="{:.1}" text-anchor="middle">No data</text>"#,
            WIDTH / 2.0,
            height / 2.0
        ));
        svg.push_str("</svg>");
        return svg;
    }

    let min = positive.iter().copied().fold(f64::INFINITY, f64::min);
    let max = positive.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    // Nudge so exact powers of ten land on their own decade.
    let lo = (min.log10() + 1e-9).floor();
    let mut hi = (max.log10() - 1e-9).ceil();
    if hi <= lo {
        hi = lo + 1.0;
    }

    let plot_w = WIDTH - BAR_LABEL_W - BAR_RIGHT;
    let scale = |d: f64| BAR_LABEL_W + (d.log10() - lo) / (hi - lo) * plot_w;
    let axis_y = BAR_TOP + BAR_ROW * sources.len() as f64;

    // Decade gridlines
    let mut decade = lo;
    while decade <= hi {
        let x = BAR_LABEL_W + (decade - lo) / (hi - lo) * plot_w;
        svg.push_str(&format!(
            r##"<line class="grid" x1="{x:.1}" y1="{BAR_TOP:.1}" x2="{x:.1}" y2="{axis_y:.1}" stroke="#ddd"/><text class="tick" x="{x:.1}" y="{:.1}" text-anchor="middle">{}</text>"##,
            axis_y + 18.0,
            format_decade(decade as i32)
        ));
        decade += 1.0;
    }

    for (i, source) in sources.iter().enumerate() {
        let y = BAR_TOP + BAR_ROW * i as f64;
        let end = if source.dose_msv > 0.0 { scale(source.dose_msv) } else { BAR_LABEL_W };
        svg.push_str(&format!(
            r##"<text class="label" x="{:.1}" y="{:.1}" text-anchor="end">{}</text><rect class="bar" x="{BAR_LABEL_W:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="#ff7f0e"><title>{}: {} mSv</title></rect><text class="value" x="{:.1}" y="{:.1}">{}</text>"##,
            BAR_LABEL_W - 8.0,
            y + BAR_ROW * 0.6,
            HtmlEscape(source.name),
            y + 4.0,
            (end - BAR_LABEL_W).max(1.0),
            BAR_ROW - 8.0,
            HtmlEscape(source.name),
            source.dose_msv,
            end + 6.0,
            y + BAR_ROW * 0.6,
            source.dose_msv,
        ));
    }

    svg.push_str(&format!(
        r#"<text class="axis-title" x="{:.1}" y="{:.1}" text-anchor="middle">Dose (mSv, log scale)</text>"#,
        BAR_LABEL_W + plot_w / 2.0,
        height - 1.0
    ));
    svg.push_str("</svg>");
    svg
}

/// Dose-response line chart: dose on x, relative risk on y, one polyline per series.
pub fn line_chart(curves: &CurveSet) -> String {
    let mut svg = svg_open(WIDTH, LINE_H, "Dose-response risk models");

    let (mut lo, mut hi) = curves.risk_bounds();
    if (hi - lo).abs() < f64::EPSILON {
        hi = lo + 1.0;
    }
    // Headroom so curves do not touch the frame.
    let pad = (hi - lo) * 0.05;
    lo -= if lo < 0.0 { pad } else { 0.0 };
    hi += pad;

    let plot_w = WIDTH - LINE_LEFT - LINE_RIGHT;
    let plot_h = LINE_H - LINE_TOP - LINE_BOTTOM;
    let sx = |d: f64| LINE_LEFT + (d - MIN_DOSE) / (MAX_DOSE - MIN_DOSE) * plot_w;
    let sy = |r: f64| LINE_TOP + (hi - r) / (hi - lo) * plot_h;
    let bottom = LINE_TOP + plot_h;

    svg.push_str(&format!(
        r##"<rect class="frame" x="{LINE_LEFT:.1}" y="{LINE_TOP:.1}" width="{plot_w:.1}" height="{plot_h:.1}" fill="none" stroke="#999"/>"##
    ));

    for step in 0..=5 {
        let dose = MIN_DOSE + (MAX_DOSE - MIN_DOSE) * step as f64 / 5.0;
        let x = sx(dose);
        svg.push_str(&format!(
            r#"<text class="tick" x="{x:.1}" y="{:.1}" text-anchor="middle">{dose:.0}</text>"#,
            bottom + 18.0
        ));
    }
    for step in 0..=4 {
        let risk = lo + (hi - lo) * step as f64 / 4.0;
        let y = sy(risk);
        svg.push_str(&format!(
            r##"<line class="grid" x1="{LINE_LEFT:.1}" y1="{y:.1}" x2="{:.1}" y2="{y:.1}" stroke="#eee"/><text class="tick" x="{:.1}" y="{:.1}" text-anchor="end">{risk:.2}</text>"##,
            LINE_LEFT + plot_w,
            LINE_LEFT - 6.0,
            y + 4.0
        ));
    }
    if lo < 0.0 {
        let y = sy(0.0);
        svg.push_str(&format!(
            r##"<line class="zero" x1="{LINE_LEFT:.1}" y1="{y:.1}" x2="{:.1}" y2="{y:.1}" stroke="#555" stroke-dasharray="4 3"/>"##,
            LINE_LEFT + plot_w
        ));
    }

    for series in &curves.series {
        let points: Vec<String> = curves
            .doses
            .iter()
            .zip(&series.risks)
            .map(|(&d, &r)| format!("{:.2},{:.2}", sx(d), sy(r)))
            .collect();
        svg.push_str(&format!(
            r#"<polyline class="series" data-model="{}" fill="none" stroke="{}" stroke-width="2" points="{}"/>"#,
            series.model.id(),
            model_color(series.model),
            points.join(" ")
        ));
    }

    for (i, series) in curves.series.iter().enumerate() {
        let y = LINE_TOP + 16.0 + 18.0 * i as f64;
        let x = LINE_LEFT + 12.0;
        svg.push_str(&format!(
            r#"<line x1="{x:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-width="3"/><text class="legend" x="{:.1}" y="{y:.1}">{}</text>"#,
            y - 4.0,
            x + 20.0,
            y - 4.0,
            model_color(series.model),
            x + 26.0,
            HtmlEscape(series.name)
        ));
    }

    svg.push_str(&format!(
        r#"<text class="axis-title" x="{:.1}" y="{:.1}" text-anchor="middle">Dose (mSv)</text><text class="axis-title" transform="translate(14 {:.1}) rotate(-90)" text-anchor="middle">Relative risk</text>"#,
        LINE_LEFT + plot_w / 2.0,
        LINE_H - 8.0,
        LINE_TOP + plot_h / 2.0
    ));
    svg.push_str("</svg>");
    svg
}

fn svg_open(width: f64, height: f64, label: &str) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width:.0} {height:.0}" role="img" aria-label="{}">"#,
        HtmlEscape(label)
    )
}

fn format_decade(exp: i32) -> String {
    let value = 10f64.powi(exp);
    if exp >= 0 {
        format!("{:.0}", value)
    } else {
        format!("{:.*}", (-exp) as usize, value)
    }
}
