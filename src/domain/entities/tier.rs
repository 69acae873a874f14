//! Subscription tiers gating templates and theme customisation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Subscription level of a store owner, ordered `Free < Premium < Unlimited`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tier {
    #[default]
    Free,
    Premium,
    Unlimited,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Free, Tier::Premium, Tier::Unlimited];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Free => "FREE",
            Tier::Premium => "PREMIUM",
            Tier::Unlimited => "UNLIMITED",
        }
    }

    /// Whether a subscriber on this tier may use something requiring `required`.
    pub fn allows(&self, required: Tier) -> bool {
        *self >= required
    }

    /// Free stores render with the default theme only.
    pub fn allows_custom_theme(&self) -> bool {
        *self >= Tier::Premium
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tier::ALL
            .into_iter()
            .find(|tier| tier.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown tier '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_ordering() {
        assert!(Tier::Free < Tier::Premium);
        assert!(Tier::Premium < Tier::Unlimited);
    }

    #[test]
    fn test_allows() {
        assert!(Tier::Free.allows(Tier::Free));
        assert!(!Tier::Free.allows(Tier::Premium));
        assert!(Tier::Premium.allows(Tier::Free));
        assert!(!Tier::Premium.allows(Tier::Unlimited));
        assert!(Tier::Unlimited.allows(Tier::Unlimited));
    }

    #[test]
    fn test_custom_theme_gate() {
        assert!(!Tier::Free.allows_custom_theme());
        assert!(Tier::Premium.allows_custom_theme());
        assert!(Tier::Unlimited.allows_custom_theme());
    }

    #[test]
    fn test_parse() {
        assert_eq!("PREMIUM".parse::<Tier>().unwrap(), Tier::Premium);
        assert_eq!("unlimited".parse::<Tier>().unwrap(), Tier::Unlimited);
        assert!("GOLD".parse::<Tier>().is_err());
    }

    #[test]
    fn test_serde_uses_uppercase() {
        assert_eq!(serde_json::to_string(&Tier::Free).unwrap(), "\"FREE\"");
        let tier: Tier = serde_json::from_str("\"UNLIMITED\"").unwrap();
        assert_eq!(tier, Tier::Unlimited);
    }
}
