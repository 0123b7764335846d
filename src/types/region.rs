// ABOUTME: AWS regions offered by the interactive create flow.
// ABOUTME: Region strings are validated against a fixed list.

use std::fmt;
use thiserror::Error;

/// Regions in the order they are offered to the user.
pub const REGIONS: &[&str] = &[
    "us-east-1",
    "us-east-2",
    "us-west-1",
    "us-west-2",
    "ca-central-1",
    "sa-east-1",
    "eu-west-1",
    "eu-west-2",
    "eu-west-3",
    "eu-central-1",
    "eu-north-1",
    "eu-south-1",
    "ap-south-1",
    "ap-northeast-1",
    "ap-northeast-2",
    "ap-northeast-3",
    "ap-southeast-1",
    "ap-southeast-2",
    "ap-east-1",
    "me-south-1",
    "af-south-1",
];

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown AWS region: {0}")]
pub struct RegionError(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Region(&'static str);

impl Region {
    pub fn new(value: &str) -> Result<Self, RegionError> {
        let value = value.trim();
        REGIONS
            .iter()
            .copied()
            .find(|r| *r == value)
            .map(Self)
            .ok_or_else(|| RegionError(value.to_string()))
    }

    pub fn all() -> impl Iterator<Item = Region> {
        REGIONS.iter().copied().map(Self)
    }

    /// Position in [`REGIONS`], used as the default selection in prompts.
    pub fn index(&self) -> usize {
        REGIONS.iter().position(|r| *r == self.0).unwrap_or(0)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Region {
    type Err = RegionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_list_position() {
        let region = Region::new("us-west-2").unwrap();
        assert_eq!(REGIONS[region.index()], "us-west-2");
    }

    #[test]
    fn unknown_region_is_rejected() {
        assert_eq!(
            Region::new("mars-north-1"),
            Err(RegionError("mars-north-1".to_string()))
        );
    }
}
