//! Site Models
//!
//! Static content types. Every value here is authored in source and never
//! mutated at runtime.

/// Severity label shown on a scam card. Display only, never used for ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiskLevel {
    Critical,
    High,
    Medium,
}

impl RiskLevel {
    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Critical => "Critical",
            RiskLevel::High => "High",
            RiskLevel::Medium => "Medium",
        }
    }

    /// CSS class for the risk badge
    pub fn badge_class(self) -> &'static str {
        match self {
            RiskLevel::Critical => "risk-badge risk-critical",
            RiskLevel::High => "risk-badge risk-high",
            RiskLevel::Medium => "risk-badge risk-medium",
        }
    }
}

/// One catalogued attack pattern
#[derive(Debug, Clone, PartialEq)]
pub struct ScamRecord {
    pub id: u32,
    pub title: &'static str,
    pub short_desc: &'static str,
    pub description: &'static str,
    pub how_it_works: &'static [&'static str],
    pub defense: &'static [&'static str],
    pub risk_level: RiskLevel,
    /// Must match the id of the category that owns this record
    pub category: &'static str,
}

/// Named group of scam records
#[derive(Debug, Clone, PartialEq)]
pub struct ScamCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    /// CSS color token for the category badge
    pub color: &'static str,
    pub scams: &'static [ScamRecord],
}

/// Self-assessment statement
#[derive(Debug, Clone, PartialEq)]
pub struct ChecklistItem {
    pub id: u32,
    pub label: &'static str,
    /// Free-text group label, unrelated to scam categories
    pub category: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    /// Inline Markdown
    pub answer: &'static str,
}

/// Hot vs. cold wallet selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WalletKind {
    Hot,
    #[default]
    Cold,
}

impl WalletKind {
    pub fn label(self) -> &'static str {
        match self {
            WalletKind::Hot => "Hot Wallet",
            WalletKind::Cold => "Cold Wallet",
        }
    }

    /// Banner text above the comparison table
    pub fn verdict(self) -> &'static str {
        match self {
            WalletKind::Hot => "Higher Risk Profile",
            WalletKind::Cold => "Maximum Security",
        }
    }
}

/// One row of the hot/cold comparison table
#[derive(Debug, Clone, PartialEq)]
pub struct WalletFeature {
    pub name: &'static str,
    pub hot: &'static str,
    pub cold: &'static str,
}

impl WalletFeature {
    pub fn value_for(&self, kind: WalletKind) -> &'static str {
        match kind {
            WalletKind::Hot => self.hot,
            WalletKind::Cold => self.cold,
        }
    }
}

/// Icon + title + body block used by the overview and tips sections
#[derive(Debug, Clone, PartialEq)]
pub struct InfoPoint {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// Headline number in the hero
#[derive(Debug, Clone, PartialEq)]
pub struct HeroStat {
    pub value: &'static str,
    pub caption: &'static str,
    pub class: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::WALLET_FEATURES;

    #[test]
    fn test_cold_wallet_is_default() {
        assert_eq!(WalletKind::default(), WalletKind::Cold);
    }

    #[test]
    fn test_wallet_verdicts() {
        assert_eq!(WalletKind::Hot.verdict(), "Higher Risk Profile");
        assert_eq!(WalletKind::Cold.verdict(), "Maximum Security");
        assert_eq!(WalletKind::Hot.label(), "Hot Wallet");
        assert_eq!(WalletKind::Cold.label(), "Cold Wallet");
    }

    #[test]
    fn test_feature_columns() {
        assert_eq!(WALLET_FEATURES.len(), 4);
        let hot: Vec<&str> = WALLET_FEATURES.iter().map(|f| f.value_for(WalletKind::Hot)).collect();
        let cold: Vec<&str> = WALLET_FEATURES.iter().map(|f| f.value_for(WalletKind::Cold)).collect();
        assert_eq!(
            hot,
            vec![
                "On internet-connected device",
                "High - always connected",
                "Relies on device security",
                "Small amounts, frequent use",
            ]
        );
        assert_eq!(
            cold,
            vec![
                "On offline, secure device",
                "Very Low - requires physical confirmation",
                "Immune - isolated environment",
                "Long-term storage, large amounts",
            ]
        );
    }
}
