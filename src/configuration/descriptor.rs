//! Project configuration descriptors.
//!
//! A descriptor is the tuple of dimension values that identifies one
//! configured variant of a project, written `buildType|platform[|targetFramework]`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Separator between dimension values in a configuration name.
pub const DIMENSION_SEPARATOR: char = '|';

/// Separator between configuration names in a list.
pub const LIST_SEPARATOR: char = ';';

/// Well-known dimension names, in name order.
pub const CONFIGURATION_DIMENSION: &str = "Configuration";
pub const PLATFORM_DIMENSION: &str = "Platform";
pub const TARGET_FRAMEWORK_DIMENSION: &str = "TargetFramework";

/// Errors produced when parsing a configuration name or building a
/// configuration from dimension values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseConfigurationError {
    /// The input was empty or whitespace.
    #[error("configuration name is empty")]
    Empty,

    /// One of the dimension values was empty.
    #[error("configuration '{input}' has an empty value for dimension {index}")]
    EmptyDimension { input: String, index: usize },

    /// A dimension value contains a separator character.
    #[error("configuration '{input}' has '{found}' in dimension {index}")]
    InvalidCharacter {
        input: String,
        index: usize,
        found: char,
    },

    /// A dimension value starts or ends with whitespace.
    #[error("configuration '{input}' has surrounding whitespace in dimension {index}")]
    PaddedDimension { input: String, index: usize },

    /// Only two or three dimension values are accepted.
    #[error("configuration '{input}' has {found} dimensions, expected 2 or 3")]
    DimensionCount { input: String, found: usize },
}

/// Immutable descriptor of one project configuration.
///
/// Equality covers the full dimension tuple, so `Debug|AnyCPU` and
/// `Debug|AnyCPU|net45` are different configurations.
///
/// Dimension values are taken verbatim: they must be non-empty, must not
/// contain `|` or `;`, and must not start or end with whitespace. Every
/// constructor enforces this, so a configuration always survives a trip
/// through its name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProjectConfiguration {
    build_type: String,
    platform: String,
    target_framework: Option<String>,
}

impl ProjectConfiguration {
    /// Create a two-dimension configuration (`buildType|platform`).
    pub fn new(
        build_type: impl Into<String>,
        platform: impl Into<String>,
    ) -> Result<Self, ParseConfigurationError> {
        Self {
            build_type: build_type.into(),
            platform: platform.into(),
            target_framework: None,
        }
        .checked()
    }

    /// Create a three-dimension configuration (`buildType|platform|targetFramework`).
    pub fn with_target_framework(
        build_type: impl Into<String>,
        platform: impl Into<String>,
        target_framework: impl Into<String>,
    ) -> Result<Self, ParseConfigurationError> {
        Self {
            build_type: build_type.into(),
            platform: platform.into(),
            target_framework: Some(target_framework.into()),
        }
        .checked()
    }

    fn checked(self) -> Result<Self, ParseConfigurationError> {
        for (index, (_, value)) in self.dimensions().enumerate() {
            check_value(value, index, value)?;
        }
        Ok(self)
    }

    pub fn build_type(&self) -> &str {
        &self.build_type
    }

    pub fn platform(&self) -> &str {
        &self.platform
    }

    pub fn target_framework(&self) -> Option<&str> {
        self.target_framework.as_deref()
    }

    /// Number of dimensions carried by this configuration (2 or 3).
    pub fn dimension_count(&self) -> usize {
        if self.target_framework.is_some() {
            3
        } else {
            2
        }
    }

    /// The canonical name, e.g. `Debug|AnyCPU|net45`.
    pub fn name(&self) -> String {
        self.to_string()
    }

    /// Dimension `(name, value)` pairs in order.
    pub fn dimensions(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            Some((CONFIGURATION_DIMENSION, self.build_type.as_str())),
            Some((PLATFORM_DIMENSION, self.platform.as_str())),
            self.target_framework
                .as_deref()
                .map(|tfm| (TARGET_FRAMEWORK_DIMENSION, tfm)),
        ]
        .into_iter()
        .flatten()
    }

    /// True when build type and platform match, ignoring any target framework.
    pub fn same_build_and_platform(&self, other: &ProjectConfiguration) -> bool {
        self.build_type == other.build_type && self.platform == other.platform
    }
}

impl fmt::Display for ProjectConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.build_type, DIMENSION_SEPARATOR, self.platform)?;
        if let Some(tfm) = &self.target_framework {
            write!(f, "{}{}", DIMENSION_SEPARATOR, tfm)?;
        }
        Ok(())
    }
}

impl FromStr for ProjectConfiguration {
    type Err = ParseConfigurationError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        if input.trim().is_empty() {
            return Err(ParseConfigurationError::Empty);
        }

        let values: Vec<&str> = input.split(DIMENSION_SEPARATOR).collect();
        for (index, value) in values.iter().enumerate() {
            check_value(input, index, value)?;
        }

        let (build_type, platform, target_framework) = match values.as_slice() {
            [build_type, platform] => (*build_type, *platform, None),
            [build_type, platform, tfm] => (*build_type, *platform, Some(*tfm)),
            _ => {
                return Err(ParseConfigurationError::DimensionCount {
                    input: input.to_string(),
                    found: values.len(),
                })
            }
        };

        Ok(Self {
            build_type: build_type.to_string(),
            platform: platform.to_string(),
            target_framework: target_framework.map(str::to_string),
        })
    }
}

/// Reject dimension values that would not survive a trip through the name.
fn check_value(input: &str, index: usize, value: &str) -> Result<(), ParseConfigurationError> {
    if value.is_empty() {
        return Err(ParseConfigurationError::EmptyDimension {
            input: input.to_string(),
            index,
        });
    }
    if let Some(found) = value
        .chars()
        .find(|c| *c == DIMENSION_SEPARATOR || *c == LIST_SEPARATOR)
    {
        return Err(ParseConfigurationError::InvalidCharacter {
            input: input.to_string(),
            index,
            found,
        });
    }
    if value.trim() != value {
        return Err(ParseConfigurationError::PaddedDimension {
            input: input.to_string(),
            index,
        });
    }
    Ok(())
}

impl TryFrom<String> for ProjectConfiguration {
    type Error = ParseConfigurationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ProjectConfiguration> for String {
    fn from(config: ProjectConfiguration) -> Self {
        config.to_string()
    }
}

/// Parse a `;`-separated list of configuration names.
///
/// Empty segments (e.g. a trailing `;`) are skipped.
pub fn parse_list(input: &str) -> Result<Vec<ProjectConfiguration>, ParseConfigurationError> {
    input
        .split(LIST_SEPARATOR)
        .filter(|segment| !segment.is_empty())
        .map(str::parse)
        .collect()
}
