//! Company record model and validation
//!
//! Records are validated at write time (seeding / bulk replace), never while
//! filtering: a malformed filter value simply matches nothing.

use chrono::{Datelike, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use validator::{Validate, ValidationError};

/// Earliest accepted founding year.
pub const MIN_FOUNDED_YEAR: i32 = 1900;

static WEBSITE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://.+").expect("valid website pattern"));

/// Fixed company size buckets
///
/// Serialized as the literal bucket strings (`"0-50"`, `"1000+"`, ...) so the
/// wire format matches the stored documents exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompanySize {
    #[serde(rename = "0-50")]
    UpTo50,
    #[serde(rename = "50-100")]
    UpTo100,
    #[serde(rename = "100-250")]
    UpTo250,
    #[serde(rename = "250-500")]
    UpTo500,
    #[serde(rename = "500-1000")]
    UpTo1000,
    #[serde(rename = "1000+")]
    Over1000,
}

impl CompanySize {
    /// All buckets, in ascending order
    pub const ALL: [CompanySize; 6] = [
        CompanySize::UpTo50,
        CompanySize::UpTo100,
        CompanySize::UpTo250,
        CompanySize::UpTo500,
        CompanySize::UpTo1000,
        CompanySize::Over1000,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CompanySize::UpTo50 => "0-50",
            CompanySize::UpTo100 => "50-100",
            CompanySize::UpTo250 => "100-250",
            CompanySize::UpTo500 => "250-500",
            CompanySize::UpTo1000 => "500-1000",
            CompanySize::Over1000 => "1000+",
        }
    }
}

impl fmt::Display for CompanySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompanySize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CompanySize::ALL
            .into_iter()
            .find(|size| size.as_str() == s)
            .ok_or_else(|| format!("unknown company size bucket: '{}'", s))
    }
}

/// A single company in the directory
///
/// `id` is an externally assigned identifier (e.g. `cmp001`), distinct from
/// any storage-internal key. All fields are required and must be non-blank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CompanyRecord {
    #[validate(custom(function = not_blank))]
    pub id: String,

    #[validate(custom(function = not_blank))]
    pub name: String,

    #[validate(custom(function = not_blank))]
    pub location: String,

    #[validate(custom(function = not_blank))]
    pub industry: String,

    pub size: CompanySize,

    #[validate(custom(function = founded_in_range))]
    pub founded: i32,

    #[validate(regex(path = *WEBSITE_RE, message = "website must start with http:// or https://"))]
    pub website: String,

    #[validate(
        custom(function = not_blank),
        length(max = 500, message = "description cannot exceed 500 characters")
    )]
    pub description: String,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("field must not be blank".into()));
    }
    Ok(())
}

fn founded_in_range(year: i32) -> Result<(), ValidationError> {
    let current_year = Utc::now().year();
    if year < MIN_FOUNDED_YEAR {
        return Err(ValidationError::new("founded_too_early")
            .with_message(format!("founded year must be {} or later", MIN_FOUNDED_YEAR).into()));
    }
    if year > current_year {
        return Err(ValidationError::new("founded_in_future")
            .with_message("founded year cannot be in the future".into()));
    }
    Ok(())
}
