use serde::{Deserialize, Serialize};

/// Review status codes the homework API can report.
///
/// The set is closed: anything else on the wire is a domain error, never a
/// new variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl ReviewStatus {
    /// Parse a wire status code. Returns `None` for anything outside the set.
    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "approved" => Some(ReviewStatus::Approved),
            "reviewing" => Some(ReviewStatus::Reviewing),
            "rejected" => Some(ReviewStatus::Rejected),
            _ => None,
        }
    }

    /// Fixed human-readable verdict for this status.
    pub fn verdict(self) -> &'static str {
        match self {
            ReviewStatus::Approved => "Work checked: the reviewer liked everything. Hooray!",
            ReviewStatus::Reviewing => "Work taken up for review by the reviewer.",
            ReviewStatus::Rejected => "Work checked: the reviewer has remarks.",
        }
    }
}

impl std::fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReviewStatus::Approved => write!(f, "approved"),
            ReviewStatus::Reviewing => write!(f, "reviewing"),
            ReviewStatus::Rejected => write!(f, "rejected"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_codes() {
        assert_eq!(ReviewStatus::parse("approved"), Some(ReviewStatus::Approved));
        assert_eq!(ReviewStatus::parse("reviewing"), Some(ReviewStatus::Reviewing));
        assert_eq!(ReviewStatus::parse("rejected"), Some(ReviewStatus::Rejected));
    }

    #[test]
    fn test_parse_rejects_unknown_codes() {
        assert_eq!(ReviewStatus::parse("graded"), None);
        assert_eq!(ReviewStatus::parse(""), None);
        assert_eq!(ReviewStatus::parse("Approved"), None);
    }

    #[test]
    fn test_display_matches_wire_codes() {
        for code in ["approved", "reviewing", "rejected"] {
            assert_eq!(ReviewStatus::parse(code).unwrap().to_string(), code);
        }
    }
}
