//! Plain-text reports for terminals.

use super::ScoredShipment;
use crate::Result;
use crate::catalog::{Catalog, DelayAverage, Impact, Section};
use crate::scoring::{FactorBand, RiskLabel};
use core::fmt::Write as _;
use ohno::IntoAppError;
use owo_colors::OwoColorize;
use std::io::Write;

const LABEL_COLUMN: usize = 20;
const MIN_BAR_WIDTH: usize = 10;
const MAX_BAR_WIDTH: usize = 40;
const FILLED: char = '█';
const EMPTY: char = '░';

/// Rendering options for console reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleStyle {
    pub colors: bool,

    /// Terminal width in columns
    pub width: usize,
}

impl ConsoleStyle {
    /// Width of the probability gauge; factor bars are half as wide.
    const fn gauge_width(self) -> usize {
        let available = self.width.saturating_sub(LABEL_COLUMN * 2);
        if available < MIN_BAR_WIDTH {
            MIN_BAR_WIDTH
        } else if available > MAX_BAR_WIDTH {
            MAX_BAR_WIDTH
        } else {
            available
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Tone {
    Good,
    Caution,
    Danger,
    Info,
    Muted,
}

impl From<RiskLabel> for Tone {
    fn from(label: RiskLabel) -> Self {
        match label {
            RiskLabel::Low => Self::Good,
            RiskLabel::Moderate => Self::Caution,
            RiskLabel::High => Self::Danger,
        }
    }
}

impl From<FactorBand> for Tone {
    fn from(band: FactorBand) -> Self {
        match band {
            FactorBand::Low => Self::Good,
            FactorBand::Elevated => Self::Caution,
            FactorBand::High => Self::Danger,
        }
    }
}

impl From<Impact> for Tone {
    fn from(impact: Impact) -> Self {
        match impact {
            Impact::High => Self::Danger,
            Impact::Medium => Self::Caution,
            Impact::Low => Self::Info,
            Impact::Note => Self::Muted,
        }
    }
}

fn paint(text: &str, tone: Tone, colors: bool) -> String {
    if !colors {
        return text.to_string();
    }

    match tone {
        Tone::Good => text.green().to_string(),
        Tone::Caution => text.yellow().to_string(),
        Tone::Danger => text.red().to_string(),
        Tone::Info => text.blue().to_string(),
        Tone::Muted => text.dimmed().to_string(),
    }
}

fn heading(text: &str, colors: bool) -> String {
    if colors { text.bold().to_string() } else { text.to_string() }
}

fn bar(filled: usize, width: usize, tone: Tone, colors: bool) -> String {
    let filled = filled.min(width);
    let solid: String = core::iter::repeat_n(FILLED, filled).collect();
    let rest: String = core::iter::repeat_n(EMPTY, width - filled).collect();
    format!("{}{rest}", paint(&solid, tone, colors))
}

fn percent_cells(pct: u8, width: usize) -> usize {
    (usize::from(pct) * width + 50) / 100
}

fn fraction_cells(fraction: f64, width: usize) -> usize {
    #[expect(clippy::cast_precision_loss, reason = "bar widths are tiny")]
    let cells = (fraction.clamp(0.0, 1.0) * width as f64).round();

    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss, reason = "value is within 0..=width")]
    let cells = cells as usize;
    cells
}

/// Group digits in threes, `8753` becomes `8,753`.
fn thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Write shipment assessments as a gauge plus factor bars per shipment.
pub fn generate(entries: &[ScoredShipment], writer: &mut impl Write, style: ConsoleStyle) -> Result<()> {
    let mut out = String::new();
    render_assessments(entries, &mut out, style).into_app_err("formatting console report")?;
    writer.write_all(out.as_bytes()).into_app_err("writing console report")?;
    Ok(())
}

fn render_assessments(entries: &[ScoredShipment], out: &mut String, style: ConsoleStyle) -> core::fmt::Result {
    let gauge_width = style.gauge_width();
    let factor_width = gauge_width / 2;

    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }

        let assessment = &entry.assessment;
        let tone = Tone::from(assessment.risk_label);

        writeln!(out, "{}", heading(&format!("Shipment {}: {}", entry.id, entry.input), style.colors))?;
        writeln!(
            out,
            "  {:<LABEL_COLUMN$} {} {:>3}%",
            "Delay probability",
            bar(percent_cells(assessment.percent(), gauge_width), gauge_width, tone, style.colors),
            assessment.percent()
        )?;
        writeln!(out, "  {}", paint(&assessment.risk_label.to_string(), tone, style.colors))?;
        writeln!(out, "  {}", assessment.summary())?;
        writeln!(out)?;
        writeln!(out, "  {}", heading("Risk factor breakdown", style.colors))?;

        for score in &assessment.factor_breakdown {
            writeln!(
                out,
                "  {:<LABEL_COLUMN$} {} {:>3}%",
                score.factor.to_string(),
                bar(
                    percent_cells(score.percentage, factor_width),
                    factor_width,
                    score.band().into(),
                    style.colors
                ),
                score.percentage
            )?;
        }
    }

    if entries.len() > 1 {
        let count = |label: RiskLabel| entries.iter().filter(|e| e.assessment.risk_label == label).count();
        writeln!(out)?;
        writeln!(
            out,
            "{} shipments: {} high, {} moderate, {} low",
            entries.len(),
            count(RiskLabel::High),
            count(RiskLabel::Moderate),
            count(RiskLabel::Low)
        )?;
    }

    Ok(())
}

/// Write the requested sections of the reference catalog.
pub fn generate_catalog(catalog: &Catalog, sections: &[Section], writer: &mut impl Write, style: ConsoleStyle) -> Result<()> {
    let mut out = String::new();
    for (i, section) in sections.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        render_section(catalog, *section, &mut out, style).into_app_err("formatting catalog report")?;
    }

    writer.write_all(out.as_bytes()).into_app_err("writing catalog report")?;
    Ok(())
}

#[expect(clippy::too_many_lines, reason = "one arm per catalog section")]
fn render_section(catalog: &Catalog, section: Section, out: &mut String, style: ConsoleStyle) -> core::fmt::Result {
    let width = style.gauge_width();
    let colors = style.colors;

    match section {
        Section::Overview => {
            let kpis = &catalog.kpis;
            writeln!(out, "{}", heading("SUPPLY CHAIN OVERVIEW", colors))?;
            writeln!(
                out,
                "  {:<LABEL_COLUMN$} {} (across {} origin cities)",
                "Total shipments",
                thousands(kpis.total_shipments),
                kpis.origin_cities
            )?;
            writeln!(
                out,
                "  {:<LABEL_COLUMN$} {:.1}% ({} late shipments)",
                "Delayed rate",
                kpis.delayed_rate_pct,
                thousands(kpis.delayed_shipments)
            )?;
            writeln!(out, "  {:<LABEL_COLUMN$} {:.1}%", "On-time rate", kpis.on_time_rate_pct())?;
            writeln!(
                out,
                "  {:<LABEL_COLUMN$} {:.2} (max observed: {} days)",
                "Avg delay days", kpis.avg_delay_days, kpis.max_delay_days
            )?;
            let best = catalog.best_model().map_or("n/a", |m| m.name);
            writeln!(out, "  {:<LABEL_COLUMN$} {:.3} ({best}, best performer)", "Model ROC-AUC", kpis.best_roc_auc)?;
        }

        Section::Highlights => {
            writeln!(out, "{}", heading("DATASET HIGHLIGHTS", colors))?;
            for highlight in catalog.highlights {
                writeln!(out, "  {:<LABEL_COLUMN$} {:<8} {}", highlight.label, highlight.value, highlight.note)?;
            }
        }

        Section::Routes => render_delays("AVERAGE DELAY BY ROUTE TYPE", catalog.routes, out, style)?,
        Section::Products => render_delays("AVERAGE DELAY BY PRODUCT CATEGORY", catalog.products, out, style)?,
        Section::Origins => render_delays("AVERAGE DELAY BY ORIGIN CITY", catalog.origins, out, style)?,
        Section::Modes => render_delays("AVERAGE DELAY BY TRANSPORT MODE", catalog.modes, out, style)?,

        Section::Monthly => {
            writeln!(out, "{}", heading("MONTHLY VOLUME AND DELAYS", colors))?;
            for month in catalog.monthly {
                writeln!(
                    out,
                    "  {:<LABEL_COLUMN$} {:>5} shipments {:>4} delayed",
                    month.month, month.shipments, month.delayed
                )?;
            }
        }

        Section::Models => {
            writeln!(out, "{}", heading("MODEL COMPARISON", colors))?;
            let best = catalog.best_model().map(|m| m.name);
            for model in catalog.models {
                let marker = if Some(model.name) == best { "  best" } else { "" };
                writeln!(
                    out,
                    "  {:<LABEL_COLUMN$} {:>5.1}% accuracy  {:.3} ROC-AUC{}",
                    model.name,
                    model.accuracy_pct,
                    model.roc_auc,
                    paint(marker, Tone::Good, colors)
                )?;
            }
        }

        Section::Confusion => {
            let matrix = &catalog.confusion;
            writeln!(
                out,
                "{}",
                heading(&format!("{} CONFUSION MATRIX (TEST SET)", matrix.model.to_uppercase()), colors)
            )?;
            writeln!(out, "  {:<LABEL_COLUMN$} {:<18} Predicted delayed", "", "Predicted on-time")?;
            writeln!(
                out,
                "  {:<LABEL_COLUMN$} {:<18} {}",
                "Actual on-time",
                paint(&format!("TP {}", thousands(matrix.true_positive)), Tone::Good, colors),
                paint(&format!("FP {}", thousands(matrix.false_positive)), Tone::Danger, colors)
            )?;
            writeln!(
                out,
                "  {:<LABEL_COLUMN$} {:<18} {}",
                "Actual delayed",
                paint(&format!("FN {}", thousands(matrix.false_negative)), Tone::Danger, colors),
                paint(&format!("TN {}", thousands(matrix.true_negative)), Tone::Good, colors)
            )?;
            writeln!(
                out,
                "  {} test shipments, {:.1}% classified correctly",
                thousands(matrix.total()),
                matrix.accuracy_pct()
            )?;
        }

        Section::Features => {
            writeln!(out, "{}", heading("FEATURE IMPORTANCE", colors))?;
            let max = catalog.features.iter().map(|f| f.importance).fold(0.0, f64::max);
            for feature in catalog.features {
                let fraction = if max > 0.0 { feature.importance / max } else { 0.0 };
                writeln!(
                    out,
                    "  {:<LABEL_COLUMN$} {} {:.2}",
                    feature.feature,
                    bar(fraction_cells(fraction, width), width, Tone::Info, colors),
                    feature.importance
                )?;
            }
        }

        Section::Delays => {
            writeln!(out, "{}", heading("DELAY DAY DISTRIBUTION", colors))?;
            writeln!(
                out,
                "  {} shipments, {} on time",
                thousands(catalog.histogram_total()),
                thousands(catalog.on_time_shipments())
            )?;
            let max = catalog.delays.iter().map(|b| b.shipments).max().unwrap_or(0);
            for bin in catalog.delays {
                let tone = match bin.delay_days {
                    0 => Tone::Good,
                    1..=4 => Tone::Caution,
                    _ => Tone::Danger,
                };
                let fraction = if max > 0 { f64::from(bin.shipments) / f64::from(max) } else { 0.0 };
                writeln!(
                    out,
                    "  {:<LABEL_COLUMN$} {} {}",
                    format!("{} days", bin.delay_days),
                    bar(fraction_cells(fraction, width), width, tone, colors),
                    thousands(bin.shipments)
                )?;
            }
        }

        Section::Correlations => {
            writeln!(out, "{}", heading("CORRELATION TO DELAY DAYS", colors))?;
            for correlation in catalog.correlations {
                writeln!(
                    out,
                    "  {:<LABEL_COLUMN$} {} {:.2}",
                    correlation.feature,
                    bar(fraction_cells(correlation.coefficient, width), width, Tone::Info, colors),
                    correlation.coefficient
                )?;
            }
        }

        Section::Disruptions => {
            writeln!(out, "{}", heading("DISRUPTION EVENT FREQUENCY", colors))?;
            let max = catalog.disruptions.iter().map(|d| d.shipments).max().unwrap_or(0);
            for disruption in catalog.disruptions {
                let fraction = if max > 0 {
                    f64::from(disruption.shipments) / f64::from(max)
                } else {
                    0.0
                };
                writeln!(
                    out,
                    "  {:<LABEL_COLUMN$} {} {}",
                    disruption.event,
                    bar(fraction_cells(fraction, width), width, Tone::Caution, colors),
                    thousands(disruption.shipments)
                )?;
            }
        }

        Section::Findings => {
            writeln!(out, "{}", heading("KEY FINDINGS", colors))?;
            for finding in catalog.findings {
                writeln!(
                    out,
                    "  {:<42} {:<22} {}",
                    finding.finding,
                    finding.variable,
                    paint(&finding.impact.to_string(), finding.impact.into(), colors)
                )?;
            }
        }
    }

    Ok(())
}

fn render_delays(title: &str, delays: &[DelayAverage], out: &mut String, style: ConsoleStyle) -> core::fmt::Result {
    let width = style.gauge_width();
    writeln!(out, "{}", heading(title, style.colors))?;

    let max = delays.iter().map(|d| d.avg_delay_days).fold(0.0, f64::max);
    for delay in delays {
        let tone = if delay.avg_delay_days > 1.1 {
            Tone::Danger
        } else if delay.avg_delay_days > 0.95 {
            Tone::Caution
        } else {
            Tone::Good
        };
        let fraction = if max > 0.0 { delay.avg_delay_days / max } else { 0.0 };
        writeln!(
            out,
            "  {:<LABEL_COLUMN$} {} {:.2}d",
            delay.label,
            bar(fraction_cells(fraction, width), width, tone, style.colors),
            delay.avg_delay_days
        )?;
    }

    Ok(())
}
