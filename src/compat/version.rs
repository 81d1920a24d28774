//! Version of the wrapped estimation backend.
//!
//! Some quirks only exist in some backend releases. Comparing against a parsed
//! `major.minor.patch` triple lets callers decide which patches still apply.

use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BackendVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl BackendVersion {
    /// First release that rejects a seasonal period of 1.
    pub const UNIT_PERIOD_CHECK: BackendVersion = BackendVersion::new(0, 11, 0);

    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self { major, minor, patch }
    }

    /// Whether this release validates `m == 1` as an error.
    pub fn rejects_unit_period(self) -> bool {
        self >= Self::UNIT_PERIOD_CHECK
    }
}

impl Default for BackendVersion {
    fn default() -> Self {
        Self::UNIT_PERIOD_CHECK
    }
}

impl fmt::Display for BackendVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for BackendVersion {
    type Err = AppError;

    /// Accepts `X`, `X.Y` or `X.Y.Z`, with an optional leading `v` and any
    /// pre-release/dev suffix after the numeric part (`0.12.0rc1`, `0.13.0.dev0`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let trimmed = trimmed.strip_prefix('v').unwrap_or(trimmed);
        let mut parts = [0u32; 3];
        let mut seen = 0;

        for (i, piece) in trimmed.split('.').take(3).enumerate() {
            let digits: String = piece.chars().take_while(|c| c.is_ascii_digit()).collect();
            if digits.is_empty() {
                if i == 0 {
                    return Err(AppError::new(2, format!("Invalid backend version '{s}'.")));
                }
                break;
            }
            parts[i] = digits
                .parse()
                .map_err(|e| AppError::new(2, format!("Invalid backend version '{s}': {e}")))?;
            seen += 1;
            if digits.len() != piece.len() {
                break;
            }
        }

        if seen == 0 {
            return Err(AppError::new(2, format!("Invalid backend version '{s}'.")));
        }
        Ok(Self::new(parts[0], parts[1], parts[2]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_forms() {
        assert_eq!("0.11.0".parse::<BackendVersion>().unwrap(), BackendVersion::new(0, 11, 0));
        assert_eq!("v1.2".parse::<BackendVersion>().unwrap(), BackendVersion::new(1, 2, 0));
        assert_eq!("0.12.0rc1".parse::<BackendVersion>().unwrap(), BackendVersion::new(0, 12, 0));
        assert_eq!("0.13.0.dev0".parse::<BackendVersion>().unwrap(), BackendVersion::new(0, 13, 0));
        assert_eq!("0.10rc2".parse::<BackendVersion>().unwrap(), BackendVersion::new(0, 10, 0));
    }

    #[test]
    fn rejects_garbage() {
        assert!("".parse::<BackendVersion>().is_err());
        assert!("abc".parse::<BackendVersion>().is_err());
    }

    #[test]
    fn unit_period_check_starts_at_0_11() {
        assert!(!BackendVersion::new(0, 10, 2).rejects_unit_period());
        assert!(BackendVersion::new(0, 11, 0).rejects_unit_period());
        assert!(BackendVersion::new(1, 0, 0).rejects_unit_period());
    }
}
