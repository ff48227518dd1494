//! Audience personas.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Placeholder substituted for any persona attribute that was left blank.
pub const NOT_SPECIFIED: &str = "Not specified";

/// Seniority of the target audience.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    /// Early-career practitioners
    #[strum(to_string = "Entry Level", serialize = "entry")]
    Entry,
    /// Practitioners with a few years in role
    #[strum(to_string = "Mid Level", serialize = "mid")]
    Mid,
    /// Senior individual contributors
    #[strum(to_string = "Senior Level", serialize = "senior")]
    Senior,
    /// Managers and executives
    #[strum(to_string = "Leadership", serialize = "lead")]
    Leadership,
}

/// How technical the audience is, ordered from least to most.
///
/// # Examples
///
/// ```
/// use sparc_core::TechnicalProficiency;
///
/// assert!(TechnicalProficiency::Basic < TechnicalProficiency::Expert);
/// assert_eq!("advanced".parse::<TechnicalProficiency>().unwrap(), TechnicalProficiency::Advanced);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum TechnicalProficiency {
    /// Little hands-on technical background
    Basic,
    /// Comfortable with common tools
    Intermediate,
    /// Deep working knowledge
    Advanced,
    /// Specialist level
    Expert,
}

/// Preferred style of content for a persona.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum ContentStyle {
    /// Implementation detail
    Technical,
    /// Business outcomes
    Strategic,
    /// How-to guidance
    Practical,
    /// Concepts and background
    Theoretical,
}

/// Everything that describes a persona, without its identity.
///
/// Experience and proficiency are optional; prompt construction substitutes
/// [`NOT_SPECIFIED`] when they are absent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PersonaProfile {
    /// Display name
    pub name: String,
    /// One or more role labels (e.g. "Data Engineer")
    pub roles: Vec<String>,
    /// Seniority
    pub experience: Option<ExperienceLevel>,
    /// Technical depth
    pub technical_proficiency: Option<TechnicalProficiency>,
    /// Preferred content styles
    #[serde(default)]
    pub content_styles: Vec<ContentStyle>,
    /// Free-text challenges this audience faces
    #[serde(default)]
    pub pain_points: Option<String>,
}

impl PersonaProfile {
    /// Create a profile with a name and a single role.
    ///
    /// # Examples
    ///
    /// ```
    /// use sparc_core::{PersonaProfile, ExperienceLevel};
    ///
    /// let profile = PersonaProfile::new("Dana", "Data Engineer")
    ///     .with_experience(ExperienceLevel::Senior);
    /// assert_eq!(profile.roles, vec!["Data Engineer".to_string()]);
    /// assert_eq!(profile.experience_label(), "Senior Level");
    /// assert_eq!(profile.proficiency_label(), "Not specified");
    /// ```
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            roles: vec![role.into()],
            ..Self::default()
        }
    }

    /// Set the experience level.
    pub fn with_experience(mut self, level: ExperienceLevel) -> Self {
        self.experience = Some(level);
        self
    }

    /// Set the technical proficiency.
    pub fn with_proficiency(mut self, proficiency: TechnicalProficiency) -> Self {
        self.technical_proficiency = Some(proficiency);
        self
    }

    /// Add a preferred content style.
    pub fn with_style(mut self, style: ContentStyle) -> Self {
        if !self.content_styles.contains(&style) {
            self.content_styles.push(style);
        }
        self
    }

    /// Set the pain points.
    pub fn with_pain_points(mut self, pain_points: impl Into<String>) -> Self {
        self.pain_points = Some(pain_points.into());
        self
    }

    /// Whether at least one role label is non-blank.
    pub fn has_role(&self) -> bool {
        self.roles.iter().any(|r| !r.trim().is_empty())
    }

    /// Non-blank role labels joined with ", ", or [`NOT_SPECIFIED`].
    pub fn roles_label(&self) -> String {
        let roles: Vec<&str> = self
            .roles
            .iter()
            .map(|r| r.trim())
            .filter(|r| !r.is_empty())
            .collect();
        if roles.is_empty() {
            NOT_SPECIFIED.to_string()
        } else {
            roles.join(", ")
        }
    }

    /// Experience label, or [`NOT_SPECIFIED`].
    pub fn experience_label(&self) -> String {
        self.experience
            .map(|e| e.to_string())
            .unwrap_or_else(|| NOT_SPECIFIED.to_string())
    }

    /// Proficiency label, or [`NOT_SPECIFIED`].
    pub fn proficiency_label(&self) -> String {
        self.technical_proficiency
            .map(|p| p.to_string())
            .unwrap_or_else(|| NOT_SPECIFIED.to_string())
    }
}

/// A stored persona.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Persona {
    /// Primary key
    pub id: i32,
    /// Descriptive attributes
    #[serde(flatten)]
    pub profile: PersonaProfile,
    /// When the persona was created (UTC)
    pub created_at: NaiveDateTime,
}

/// Partial persona edit; `None` fields are left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, derive_setters::Setters)]
#[setters(prefix = "with_", strip_option)]
pub struct PersonaUpdate {
    /// New display name
    pub name: Option<String>,
    /// Replacement role labels
    pub roles: Option<Vec<String>>,
    /// New experience level
    pub experience: Option<ExperienceLevel>,
    /// New technical proficiency
    pub technical_proficiency: Option<TechnicalProficiency>,
    /// Replacement content styles
    pub content_styles: Option<Vec<ContentStyle>>,
    /// New pain points
    pub pain_points: Option<String>,
}

impl PersonaUpdate {
    /// Whether the update changes nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.roles.is_none()
            && self.experience.is_none()
            && self.technical_proficiency.is_none()
            && self.content_styles.is_none()
            && self.pain_points.is_none()
    }

    /// Apply the set fields to a profile.
    pub fn apply_to(&self, profile: &mut PersonaProfile) {
        if let Some(name) = &self.name {
            profile.name = name.clone();
        }
        if let Some(roles) = &self.roles {
            profile.roles = roles.clone();
        }
        if let Some(experience) = self.experience {
            profile.experience = Some(experience);
        }
        if let Some(proficiency) = self.technical_proficiency {
            profile.technical_proficiency = Some(proficiency);
        }
        if let Some(styles) = &self.content_styles {
            profile.content_styles = styles.clone();
        }
        if let Some(pain_points) = &self.pain_points {
            profile.pain_points = Some(pain_points.clone());
        }
    }
}
