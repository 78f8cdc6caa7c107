use crate::models::{NamedTagMap, RiskItem, RiskPolicy, RiskReport};

const HIGH_RISK_NOTE: &str = "HIGH: location or ownership information exposed";
const MEDIUM_RISK_NOTE: &str = "MEDIUM: potentially sensitive information";

const GPS_ADVISORY: &str = "Remove GPS metadata before sharing this image";
const REVIEW_ADVISORY: &str = "Review and remove personal or sensitive metadata";
const ALL_CLEAR: &str = "No significant security risks detected";

/// Assigns each named tag to a risk tier and derives recommendations.
///
/// Total over any input map: classification never fails, it just produces
/// empty lists when nothing matches.
#[derive(Clone, Debug, Default)]
pub struct RiskClassifier {
    policy: RiskPolicy,
}

impl RiskClassifier {
    pub fn new(policy: RiskPolicy) -> Self {
        Self { policy }
    }

    /// High-risk membership is an exact name match and short-circuits the
    /// medium check: a tag lands in at most one tier, exactly once, no
    /// matter how many keywords its name contains.
    pub fn classify(&self, tags: &NamedTagMap, filename: &str) -> RiskReport {
        let mut report = RiskReport {
            filename: String::from(filename),
            high_risk_items: Vec::new(),
            medium_risk_items: Vec::new(),
            recommendations: Vec::new(),
        };

        for (tag, value) in tags {
            if self.policy.high_risk_tags.iter().any(|name| name == tag) {
                report.high_risk_items.push(RiskItem {
                    tag: tag.clone(),
                    value: value.clone(),
                    risk: String::from(HIGH_RISK_NOTE),
                });
            } else if self
                .policy
                .risk_keywords
                .iter()
                .any(|keyword| tag.contains(keyword.as_str()))
            {
                report.medium_risk_items.push(RiskItem {
                    tag: tag.clone(),
                    value: value.clone(),
                    risk: String::from(MEDIUM_RISK_NOTE),
                });
            }
        }

        if !report.high_risk_items.is_empty() {
            report.recommendations.push(String::from(GPS_ADVISORY));
        }
        if !report.medium_risk_items.is_empty() {
            report.recommendations.push(String::from(REVIEW_ADVISORY));
        }
        if report.is_clean() {
            report.recommendations.push(String::from(ALL_CLEAR));
        }

        report
    }
}
