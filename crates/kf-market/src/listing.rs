use kf_core::Rating;
use serde::Deserialize;
use serde::Serialize;

/// Marketplace tab a listing belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tab {
    Financial,
    NonFinancial,
    Courses,
    Investment,
    Communities,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Financial,
        Tab::NonFinancial,
        Tab::Courses,
        Tab::Investment,
        Tab::Communities,
    ];
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Financial => "financial",
            Self::NonFinancial => "non-financial",
            Self::Courses => "courses",
            Self::Investment => "investment",
            Self::Communities => "communities",
        }
    }
}

impl TryFrom<&str> for Tab {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|tab| tab.slug() == s)
            .ok_or_else(|| format!("unknown marketplace tab: {}", s))
    }
}

impl std::fmt::Display for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.slug())
    }
}

/// Pricing bucket offered by the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Pricing {
    Free,
    Subsidised,
    Paid,
}

impl TryFrom<&str> for Pricing {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.to_ascii_lowercase().as_str() {
            "free" => Ok(Self::Free),
            "subsidised" => Ok(Self::Subsidised),
            "paid" => Ok(Self::Paid),
            _ => Err(format!("unknown pricing: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Contact {
    pub phone: &'static str,
    pub email: &'static str,
    pub website: &'static str,
}

/// Display record for one marketplace service. Built from static
/// literals and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Listing {
    pub id: &'static str,
    pub name: &'static str,
    pub provider: &'static str,
    pub tab: Tab,
    pub category: &'static str,
    pub industry: &'static str,
    pub description: &'static str,
    pub rating: Rating,
    pub cost: &'static str,
    pub pricing: Pricing,
    pub processing: &'static str,
    pub features: &'static [&'static str],
    pub requirements: &'static [&'static str],
    pub benefits: &'static [&'static str],
    pub contact: Contact,
    pub new: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn tab_slugs_roundtrip() {
        for tab in Tab::ALL {
            assert_eq!(Tab::try_from(tab.slug()), Ok(tab));
        }
        assert!(Tab::try_from("loans").is_err());
    }
    #[test]
    fn pricing_parses_selector_values() {
        assert_eq!(Pricing::try_from("Paid"), Ok(Pricing::Paid));
        assert!(Pricing::try_from("cheap").is_err());
    }
    #[test]
    fn pricing_uses_kebab_case() {
        assert_eq!(serde_json::to_string(&Pricing::Subsidised).unwrap(), "\"subsidised\"");
    }
}
