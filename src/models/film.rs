//! Film model, release tiers and film validation

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppError;

// ---------------------------------------------------------------------------
// ReleaseTier
// ---------------------------------------------------------------------------

/// Pricing category of a film
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum ReleaseTier {
    New,
    Regular,
    Old,
}

impl ReleaseTier {
    pub const ALL: [ReleaseTier; 3] = [ReleaseTier::New, ReleaseTier::Regular, ReleaseTier::Old];

    /// Days billed at the flat base rate before per-day excess charges start
    pub fn grace_period(self) -> u16 {
        match self {
            ReleaseTier::New => 0,
            ReleaseTier::Regular => 3,
            ReleaseTier::Old => 5,
        }
    }

    /// Lowercase literal used in routes and requests
    pub fn as_str(self) -> &'static str {
        match self {
            ReleaseTier::New => "new",
            ReleaseTier::Regular => "regular",
            ReleaseTier::Old => "old",
        }
    }
}

impl FromStr for ReleaseTier {
    type Err = AppError;

    /// Case-insensitive parse against `new`, `regular` and `old`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tier| tier.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| AppError::UnknownReleaseTier(s.to_string()))
    }
}

impl fmt::Display for ReleaseTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ReleaseTier::New => "New",
            ReleaseTier::Regular => "Regular",
            ReleaseTier::Old => "Old",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// A single film validation failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    EmptyName,
    EmptyDirector,
    MissingReleaseTier,
    UnknownReleaseTier(String),
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::EmptyName => write!(f, "film name cannot be empty"),
            ValidationIssue::EmptyDirector => write!(f, "film director cannot be empty"),
            ValidationIssue::MissingReleaseTier => write!(f, "film release tier cannot be empty"),
            ValidationIssue::UnknownReleaseTier(value) => write!(
                f,
                "unknown release tier {:?}, expected one of new, regular, old",
                value
            ),
        }
    }
}

/// Ordered set of independent validation failures
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationIssue>);

impl ValidationErrors {
    pub fn push(&mut self, issue: ValidationIssue) {
        self.0.push(issue);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.0
    }

    pub fn contains(&self, issue: &ValidationIssue) -> bool {
        self.0.contains(issue)
    }

    /// `Ok(())` when nothing was collected
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} errors encountered", self.0.len())?;
        for issue in &self.0 {
            write!(f, "\n- {}", issue)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// ---------------------------------------------------------------------------
// Film
// ---------------------------------------------------------------------------

/// Film held in the catalogue. Identity is the exact, case-sensitive name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Film {
    pub name: String,
    pub director: String,
    pub release: ReleaseTier,
}

impl Film {
    pub fn new(name: impl Into<String>, director: impl Into<String>, release: ReleaseTier) -> Self {
        Self {
            name: name.into(),
            director: director.into(),
            release,
        }
    }

    /// Run every field check and report all violations together
    pub fn is_valid(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        check_fields(&self.name, &self.director, &mut errors);
        errors.into_result()
    }
}

/// Candidate film as received from outside, release tier still unparsed
#[derive(Debug, Clone)]
pub struct FilmDraft {
    pub name: String,
    pub director: String,
    pub release: String,
}

impl FilmDraft {
    pub fn new(
        name: impl Into<String>,
        director: impl Into<String>,
        release: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            director: director.into(),
            release: release.into(),
        }
    }

    /// Validate every field independently and build the film
    pub fn validate(self) -> Result<Film, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        check_fields(&self.name, &self.director, &mut errors);

        let release = if self.release.is_empty() {
            errors.push(ValidationIssue::MissingReleaseTier);
            None
        } else {
            match self.release.parse::<ReleaseTier>() {
                Ok(tier) => Some(tier),
                Err(_) => {
                    errors.push(ValidationIssue::UnknownReleaseTier(self.release.clone()));
                    None
                }
            }
        };

        match release {
            Some(release) if errors.is_empty() => Ok(Film {
                name: self.name,
                director: self.director,
                release,
            }),
            _ => Err(errors),
        }
    }
}

fn check_fields(name: &str, director: &str, errors: &mut ValidationErrors) {
    if name.is_empty() {
        errors.push(ValidationIssue::EmptyName);
    }
    if director.is_empty() {
        errors.push(ValidationIssue::EmptyDirector);
    }
}
