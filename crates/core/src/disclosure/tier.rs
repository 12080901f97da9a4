//! Authorization tiers.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::error::UnknownTierError;

/// The authorization level of the requester.
///
/// Tiers are ordered by trust: `Admin` sees everything, `ReadOnly` the
/// least. `Unknown` is the safe harbor for unrecognized claims and shares
/// the `ReadOnly` rule set; it is never treated as `Admin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AuthorizationTier {
    /// Full disclosure; nothing redacted.
    Admin,
    /// Operational staff; payment identifiers withheld.
    Manager,
    /// Regular service access; balances also withheld.
    Standard,
    /// Minimal disclosure.
    ReadOnly,
    /// Unrecognized claim; redacts as `ReadOnly`.
    Unknown,
}

impl AuthorizationTier {
    /// All tiers, ordered from most to least trusted.
    pub const ALL: [Self; 5] = [
        Self::Admin,
        Self::Manager,
        Self::Standard,
        Self::ReadOnly,
        Self::Unknown,
    ];

    /// Resolves a tier from an external authorization claim, degrading to
    /// [`AuthorizationTier::Unknown`] when the claim is unrecognized.
    ///
    /// The degradation is observable: an unrecognized claim indicates a
    /// client or identity-provider inconsistency, so a warning event is
    /// emitted before proceeding with maximal redaction.
    #[must_use]
    pub fn resolve(claim: &str) -> Self {
        claim.parse().unwrap_or_else(|_| {
            warn!(claim, "unrecognized authorization tier, degrading to maximal redaction");
            Self::Unknown
        })
    }

    /// Returns the claim string this tier is granted as.
    #[must_use]
    pub const fn as_claim(self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Manager => "MANAGER",
            Self::Standard => "STANDARD",
            Self::ReadOnly => "READONLY",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for AuthorizationTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_claim())
    }
}

impl std::str::FromStr for AuthorizationTier {
    type Err = UnknownTierError;

    /// Strict parsing of a granted claim.
    ///
    /// Only the four grantable tiers parse; `UNKNOWN` is an internal value
    /// no identity provider should issue, so it is rejected here too.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ADMIN" => Ok(Self::Admin),
            "MANAGER" => Ok(Self::Manager),
            "STANDARD" => Ok(Self::Standard),
            "READONLY" => Ok(Self::ReadOnly),
            _ => Err(UnknownTierError {
                claim: s.to_string(),
            }),
        }
    }
}
