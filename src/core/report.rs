#![allow(dead_code)]

use serde::{Deserialize, Serialize};

/// Privacy analysis returned by the audit service for one page.
///
/// `privacy_score`, `classification` and `cookies` are required; a
/// response missing them is rejected at the HTTP boundary instead of
/// being rendered with holes. The service also sends echo fields
/// (`url`, `domain`, ...); they are optional, pass through into the
/// JSON output, and the table view reads only a couple of them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub privacy_score: u8,
    pub classification: String,
    #[serde(default)]
    pub warnings: Vec<String>,
    pub cookies: CookieSummary,
    #[serde(default)]
    pub risks: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_accessible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classification_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_risks: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CookieSummary {
    pub total: usize,
    pub tracking: usize,
    #[serde(default)]
    pub details: Vec<CookieDetail>,
}

impl CookieSummary {
    /// Cookies the service did not flag as tracking.
    pub fn functional(&self) -> usize {
        self.total.saturating_sub(self.tracking)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CookieDetail {
    pub cookie: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub risk: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Score band used for coloring and the one-line verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    Good,
    Moderate,
    HighRisk,
}

impl ScoreTier {
    pub fn of(score: u8) -> Self {
        match score {
            80.. => ScoreTier::Good,
            50..=79 => ScoreTier::Moderate,
            _ => ScoreTier::HighRisk,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ScoreTier::Good => "This site follows good privacy practices",
            ScoreTier::Moderate => "Moderate tracking detected, some attention recommended",
            ScoreTier::HighRisk => "Heavy tracking detected on this site",
        }
    }
}

impl std::fmt::Display for ScoreTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreTier::Good => write!(f, "good"),
            ScoreTier::Moderate => write!(f, "moderate"),
            ScoreTier::HighRisk => write!(f, "high-risk"),
        }
    }
}

/// Badge level for a single cookie row. The service labels risk in
/// Portuguese ("Alto", "Médio", "Baixo"); anything unrecognized is
/// shown as low rather than dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskBadge {
    High,
    Medium,
    Low,
}

impl RiskBadge {
    pub fn of(label: &str) -> Self {
        match label {
            "Alto" => RiskBadge::High,
            "Médio" => RiskBadge::Medium,
            _ => RiskBadge::Low,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(ScoreTier::of(100), ScoreTier::Good);
        assert_eq!(ScoreTier::of(80), ScoreTier::Good);
        assert_eq!(ScoreTier::of(79), ScoreTier::Moderate);
        assert_eq!(ScoreTier::of(50), ScoreTier::Moderate);
        assert_eq!(ScoreTier::of(49), ScoreTier::HighRisk);
        assert_eq!(ScoreTier::of(0), ScoreTier::HighRisk);
    }

    #[test]
    fn test_risk_badge_labels() {
        assert_eq!(RiskBadge::of("Alto"), RiskBadge::High);
        assert_eq!(RiskBadge::of("Médio"), RiskBadge::Medium);
        assert_eq!(RiskBadge::of("Baixo"), RiskBadge::Low);
        assert_eq!(RiskBadge::of(""), RiskBadge::Low);
        assert_eq!(RiskBadge::of("severe"), RiskBadge::Low);
    }

    #[test]
    fn test_functional_count_saturates() {
        let summary = CookieSummary {
            total: 5,
            tracking: 3,
            details: vec![],
        };
        assert_eq!(summary.functional(), 2);

        let inconsistent = CookieSummary {
            total: 2,
            tracking: 7,
            details: vec![],
        };
        assert_eq!(inconsistent.functional(), 0);
    }

    #[test]
    fn test_parse_high_risk_payload() {
        let body = r#"{
            "privacy_score": 42,
            "classification": "Risco Alto",
            "cookies": {"total": 2, "tracking": 1, "details": []},
            "warnings": [],
            "risks": ["Rastreamento cruzado"],
            "recommendations": []
        }"#;

        let report: Report = serde_json::from_str(body).unwrap();
        assert_eq!(report.privacy_score, 42);
        assert_eq!(ScoreTier::of(report.privacy_score), ScoreTier::HighRisk);
        assert_eq!(report.risks, vec!["Rastreamento cruzado"]);
        assert_eq!(report.cookies.total, 2);
        assert_eq!(report.cookies.functional(), 1);
    }

    #[test]
    fn test_parse_full_service_payload() {
        let body = r#"{
            "url": "https://example.com",
            "domain": "example.com",
            "status": "success",
            "page_accessible": true,
            "privacy_score": 85,
            "classification": "Boa proteção de privacidade",
            "classification_color": "green",
            "risks": ["Nenhum risco significativo detectado"],
            "warnings": [],
            "total_risks": 0,
            "cookies": {
                "total": 1,
                "tracking": 0,
                "details": [
                    {"cookie": "session", "type": "Desconhecido", "category": "unknown", "risk": "Baixo"}
                ]
            },
            "recommendations": ["Continue monitorando regularmente"]
        }"#;

        let report: Report = serde_json::from_str(body).unwrap();
        assert_eq!(report.privacy_score, 85);
        assert_eq!(report.domain.as_deref(), Some("example.com"));
        assert_eq!(report.page_accessible, Some(true));
        assert_eq!(report.cookies.details.len(), 1);
        assert_eq!(report.cookies.details[0].kind, "Desconhecido");
        assert_eq!(RiskBadge::of(&report.cookies.details[0].risk), RiskBadge::Low);
    }

    #[test]
    fn test_missing_score_is_rejected() {
        let body = r#"{
            "classification": "Risco Alto",
            "cookies": {"total": 0, "tracking": 0, "details": []}
        }"#;
        assert!(serde_json::from_str::<Report>(body).is_err());
    }

    #[test]
    fn test_missing_sequences_default_to_empty() {
        let body = r#"{
            "privacy_score": 70,
            "classification": "Proteção moderada",
            "cookies": {"total": 0, "tracking": 0}
        }"#;
        let report: Report = serde_json::from_str(body).unwrap();
        assert!(report.warnings.is_empty());
        assert!(report.risks.is_empty());
        assert!(report.recommendations.is_empty());
        assert!(report.cookies.details.is_empty());
    }
}
