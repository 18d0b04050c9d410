//! Stop identifier types.

use std::fmt;

/// Error returned when parsing an invalid stop identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid stop id: {reason}")]
pub struct InvalidStopId {
    reason: &'static str,
}

/// An opaque transit stop identifier.
///
/// By convention ids look like `"{agency_prefix}_{numeric_id}"`
/// (e.g. `"1_75403"`), but once constructed the id is treated as an
/// opaque string everywhere downstream.
///
/// # Examples
///
/// ```
/// use sign_server::stops::StopId;
///
/// let stop = StopId::parse("1_75403").unwrap();
/// assert_eq!(stop.as_str(), "1_75403");
///
/// // User-entered ids without an agency prefix are normalized
/// let stop = StopId::normalize("75403").unwrap();
/// assert_eq!(stop.as_str(), "1_75403");
///
/// // Empty input is rejected
/// assert!(StopId::parse("").is_err());
/// assert!(StopId::parse("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StopId(String);

impl StopId {
    /// Parse a stop id from a string.
    ///
    /// Surrounding whitespace is trimmed; the result must be non-empty.
    pub fn parse(s: &str) -> Result<Self, InvalidStopId> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(InvalidStopId {
                reason: "must not be empty",
            });
        }

        Ok(StopId(trimmed.to_string()))
    }

    /// Parse a user-entered stop id, applying the agency-prefix convention.
    ///
    /// Input with no `_` separator is assumed to be a bare numeric id for
    /// agency 1 and gets `"1_"` prepended; input already carrying a prefix
    /// passes through unchanged.
    pub fn normalize(s: &str) -> Result<Self, InvalidStopId> {
        let id = Self::parse(s)?;

        if id.0.contains('_') {
            Ok(id)
        } else {
            Ok(StopId(format!("1_{}", id.0)))
        }
    }

    /// Returns the stop id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopId({})", self.0)
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_ids() {
        assert!(StopId::parse("1_75403").is_ok());
        assert!(StopId::parse("40_990").is_ok());
        assert!(StopId::parse("75403").is_ok());
    }

    #[test]
    fn parse_trims_whitespace() {
        let stop = StopId::parse("  1_75403 ").unwrap();
        assert_eq!(stop.as_str(), "1_75403");
    }

    #[test]
    fn reject_empty() {
        assert!(StopId::parse("").is_err());
        assert!(StopId::parse("   ").is_err());
        assert!(StopId::parse("\t\n").is_err());
    }

    #[test]
    fn normalize_prepends_default_agency() {
        let stop = StopId::normalize("75403").unwrap();
        assert_eq!(stop.as_str(), "1_75403");
    }

    #[test]
    fn normalize_keeps_existing_prefix() {
        let stop = StopId::normalize("40_990").unwrap();
        assert_eq!(stop.as_str(), "40_990");

        let stop = StopId::normalize("1_75403").unwrap();
        assert_eq!(stop.as_str(), "1_75403");
    }

    #[test]
    fn normalize_rejects_empty() {
        assert!(StopId::normalize("").is_err());
        assert!(StopId::normalize("  ").is_err());
    }

    #[test]
    fn display() {
        let stop = StopId::parse("1_75403").unwrap();
        assert_eq!(format!("{}", stop), "1_75403");
    }

    #[test]
    fn debug() {
        let stop = StopId::parse("1_75403").unwrap();
        assert_eq!(format!("{:?}", stop), "StopId(1_75403)");
    }

    #[test]
    fn equality() {
        let a = StopId::parse("1_75403").unwrap();
        let b = StopId::parse("1_75403").unwrap();
        let c = StopId::parse("1_431").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn hash_consistent_with_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(StopId::parse("1_75403").unwrap());
        assert!(set.contains(&StopId::parse("1_75403").unwrap()));
        assert!(!set.contains(&StopId::parse("1_431").unwrap()));
    }
}
