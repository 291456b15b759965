use colored::*;

use crate::core::report::{Report, RiskBadge, ScoreTier};
use crate::core::state::ScanState;

/// Detail rows shown before collapsing the rest into a count.
const DETAIL_LIMIT: usize = 5;

pub struct OutputFormatter {
    format: String,
}

impl OutputFormatter {
    pub fn new(format: &str) -> Self {
        Self {
            format: format.to_string(),
        }
    }

    pub fn display(&self, state: &ScanState, site: Option<&str>) {
        match self.format.as_str() {
            "json" => self.display_json(state),
            _ => self.display_table(state, site),
        }
    }

    fn display_json(&self, state: &ScanState) {
        let output = match state {
            ScanState::Ready(report) => serde_json::json!({
                "state": state.label(),
                "tier": ScoreTier::of(report.privacy_score).to_string(),
                "report": report,
            }),
            ScanState::Error(message) => serde_json::json!({
                "state": state.label(),
                "error": message,
            }),
            _ => serde_json::json!({ "state": state.label() }),
        };
        println!("{}", serde_json::to_string_pretty(&output).unwrap());
    }

    fn display_table(&self, state: &ScanState, site: Option<&str>) {
        match state {
            ScanState::Ready(report) => self.display_report(report, site),
            ScanState::Error(message) => self.display_error(message),
            ScanState::Loading => println!("  Scanning..."),
            ScanState::Idle => println!("  No scan has run yet."),
        }
    }

    fn display_report(&self, report: &Report, site: Option<&str>) {
        // Header
        println!();
        println!("{}", "DataShield v0.1.0".bold());
        println!("{}", "─".repeat(64));
        println!();

        // The report's own domain echo covers the case where the
        // header lookup failed but the audit went through.
        if let Some(site) = site.or(report.domain.as_deref()) {
            println!("  Site: {}", site.cyan());
            println!();
        }

        // Score
        let tier = ScoreTier::of(report.privacy_score);
        let score_str = format!(
            "PRIVACY SCORE: {}/100 ({})",
            report.privacy_score, report.classification
        );
        match tier {
            ScoreTier::Good => println!("  {}", score_str.green().bold()),
            ScoreTier::Moderate => println!("  {}", score_str.yellow().bold()),
            ScoreTier::HighRisk => println!("  {}", score_str.red().bold()),
        }
        println!("  {}", tier.description().dimmed());
        if report.page_accessible == Some(false) {
            println!(
                "  {}",
                "Page content was not reachable; analysis covers URL and cookies only."
                    .dimmed()
            );
        }
        println!();

        // Warnings
        if !report.warnings.is_empty() {
            for warning in &report.warnings {
                println!("  {}", format!("! {}", warning).yellow());
            }
            println!();
        }

        println!("{}", "─".repeat(64));

        // Cookie summary and detail rows
        println!();
        println!("  {}", "COOKIES".bold());
        println!(
            "    Total: {}   Tracking: {}   Functional: {}",
            report.cookies.total,
            report.cookies.tracking.to_string().red(),
            report.cookies.functional().to_string().green(),
        );

        if !report.cookies.details.is_empty() {
            println!();
            for detail in report.cookies.details.iter().take(DETAIL_LIMIT) {
                let badge = match RiskBadge::of(&detail.risk) {
                    RiskBadge::High => detail.risk.red().bold(),
                    RiskBadge::Medium => detail.risk.yellow(),
                    RiskBadge::Low => detail.risk.green(),
                };
                println!("    {:<24} {:<20} {}", detail.cookie, detail.kind, badge);
            }
            let hidden = report.cookies.details.len().saturating_sub(DETAIL_LIMIT);
            if hidden > 0 {
                println!(
                    "    {}",
                    format!("... and {} more cookie(s)", hidden).dimmed()
                );
            }
        }
        println!();

        // Risks
        if !report.risks.is_empty() {
            println!("  {} ({})", "RISKS".red().bold(), report.risks.len());
            for risk in &report.risks {
                println!("    - {}", risk);
            }
            println!();
        }

        // Recommendations
        if !report.recommendations.is_empty() {
            println!("  {}", "RECOMMENDATIONS".green().bold());
            for recommendation in &report.recommendations {
                println!("    - {}", recommendation);
            }
            println!();
        }
    }

    fn display_error(&self, message: &str) {
        println!();
        println!("  {} {}", "ERROR".red().bold(), message);
        println!();
        println!("  Run {} to try again.", "datashield scan".cyan());
        println!();
    }
}
