/// Core identifier and classification types used throughout the domain layer
///
/// This module defines the HabitId newtype plus the Category and Frequency
/// enums carried by every habit. Both enums are closed sets; the category is
/// a semantic tag only, and icon/accent lookups live in the display module.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::DomainError;

/// Unique identifier for a habit
///
/// Newtype over a UUID for type safety, so a habit id can't be confused
/// with any other string-shaped value floating through the app.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HabitId(pub Uuid);

impl HabitId {
    /// Generate a new random habit ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a habit ID from its string form (useful when loading stored state)
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl fmt::Display for HabitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Life areas a habit can belong to
///
/// This is the closed set the product ships with. The tag drives grouping and
/// the display lookups, but never changes how completions or statistics behave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Exercise and physical training
    Fitness,
    /// Books, articles, study pages
    Reading,
    /// Water intake
    Hydration,
    /// Meditation and reflection practice
    Meditation,
    /// Bedtime and sleep hygiene
    Sleep,
}

impl Category {
    /// Every category, in presentation order (useful for form surfaces)
    pub const ALL: [Category; 5] = [
        Category::Fitness,
        Category::Reading,
        Category::Hydration,
        Category::Meditation,
        Category::Sleep,
    ];

    /// Get the lowercase name for this category
    ///
    /// This is the same spelling used in serialized state and in the
    /// advice-provider prompt.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Fitness => "fitness",
            Category::Reading => "reading",
            Category::Hydration => "hydration",
            Category::Meditation => "meditation",
            Category::Sleep => "sleep",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fitness" => Ok(Category::Fitness),
            "reading" => Ok(Category::Reading),
            "hydration" => Ok(Category::Hydration),
            "meditation" => Ok(Category::Meditation),
            "sleep" => Ok(Category::Sleep),
            other => Err(DomainError::UnknownCategory(other.to_string())),
        }
    }
}

/// How often a habit is meant to be performed
///
/// Informational only: completion toggling and streaks are day-granular for
/// every habit regardless of this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    /// Every single day
    Daily,
    /// Once or more per week
    Weekly,
    /// Once or more per month
    Monthly,
}

impl Frequency {
    /// Every frequency, in presentation order
    pub const ALL: [Frequency; 3] = [
        Frequency::Daily,
        Frequency::Weekly,
        Frequency::Monthly,
    ];

    /// Get the lowercase name for this frequency
    pub fn name(&self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Frequency {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" => Ok(Frequency::Daily),
            "weekly" => Ok(Frequency::Weekly),
            "monthly" => Ok(Frequency::Monthly),
            other => Err(DomainError::UnknownFrequency(other.to_string())),
        }
    }
}
