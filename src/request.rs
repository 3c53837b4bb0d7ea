//! Request types for excuse generation.
//!
//! An [`ExcuseRequest`] is an immutable-per-call value object assembled by
//! the presentation layer (CLI flags here, a form in other frontends) and
//! handed to the generator. Specificity is clamped to 0-10 by the input
//! surface; the core does not re-validate it.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Scenario category for an excuse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Missing a work deadline.
    #[default]
    WorkDeadline,
    /// Late or missing school work.
    SchoolAssignment,
    /// Skipping a social event.
    SocialEvent,
    /// Rescheduling an appointment.
    Appointment,
    /// Travel or commute delays.
    TravelCommute,
    /// Anything else.
    General,
}

impl Category {
    /// Display name used by the template catalog.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::WorkDeadline => "Work Deadline",
            Category::SchoolAssignment => "School Assignment",
            Category::SocialEvent => "Social Event",
            Category::Appointment => "Appointment",
            Category::TravelCommute => "Travel/Commute",
            Category::General => "General",
        }
    }

    /// Parse a category from its display name.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Work Deadline" => Some(Self::WorkDeadline),
            "School Assignment" => Some(Self::SchoolAssignment),
            "Social Event" => Some(Self::SocialEvent),
            "Appointment" => Some(Self::Appointment),
            "Travel/Commute" => Some(Self::TravelCommute),
            "General" => Some(Self::General),
            _ => None,
        }
    }

    /// All categories in form order.
    pub fn all() -> [Category; 6] {
        [
            Category::WorkDeadline,
            Category::SchoolAssignment,
            Category::SocialEvent,
            Category::Appointment,
            Category::TravelCommute,
            Category::General,
        ]
    }
}

/// Who the excuse is addressed to.
///
/// Part of the request surface but never consumed by generation logic;
/// frontends may use it for display or routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Audience {
    #[default]
    Manager,
    Professor,
    Friend,
    Family,
    Client,
    Other,
}

impl Audience {
    pub fn as_str(&self) -> &'static str {
        match self {
            Audience::Manager => "Manager",
            Audience::Professor => "Professor",
            Audience::Friend => "Friend",
            Audience::Family => "Family",
            Audience::Client => "Client",
            Audience::Other => "Other",
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Manager" => Some(Self::Manager),
            "Professor" => Some(Self::Professor),
            "Friend" => Some(Self::Friend),
            "Family" => Some(Self::Family),
            "Client" => Some(Self::Client),
            "Other" => Some(Self::Other),
            _ => None,
        }
    }

    /// All audiences in form order.
    pub fn all() -> [Audience; 6] {
        [
            Audience::Manager,
            Audience::Professor,
            Audience::Friend,
            Audience::Family,
            Audience::Client,
            Audience::Other,
        ]
    }
}

/// Tone of voice for the excuse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    #[default]
    Professional,
    Casual,
    Sincere,
    Brief,
    LightHearted,
}

impl Tone {
    /// Display name used by the template catalog.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Professional => "Professional",
            Tone::Casual => "Casual",
            Tone::Sincere => "Sincere",
            Tone::Brief => "Brief",
            Tone::LightHearted => "Light-hearted",
        }
    }

    /// Parse a tone from its display name.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Professional" => Some(Self::Professional),
            "Casual" => Some(Self::Casual),
            "Sincere" => Some(Self::Sincere),
            "Brief" => Some(Self::Brief),
            "Light-hearted" => Some(Self::LightHearted),
            _ => None,
        }
    }

    /// All tones in form order.
    pub fn all() -> [Tone; 5] {
        [
            Tone::Professional,
            Tone::Casual,
            Tone::Sincere,
            Tone::Brief,
            Tone::LightHearted,
        ]
    }
}

/// Requested output length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Length {
    /// Truncate to the first sentence when the text runs long.
    Short,
    /// Use the rendered template as-is.
    #[default]
    Medium,
    /// Append a courtesy closing sentence.
    Long,
}

impl Length {
    pub fn as_str(&self) -> &'static str {
        match self {
            Length::Short => "Short",
            Length::Medium => "Medium",
            Length::Long => "Long",
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Short" => Some(Self::Short),
            "Medium" => Some(Self::Medium),
            "Long" => Some(Self::Long),
            _ => None,
        }
    }

    /// All lengths in form order.
    pub fn all() -> [Length; 3] {
        [Length::Short, Length::Medium, Length::Long]
    }
}

/// A single excuse generation request.
#[derive(Debug, Clone)]
pub struct ExcuseRequest {
    /// Scenario category.
    pub category: Category,
    /// Addressee. Accepted but not consumed by generation.
    pub audience: Audience,
    /// Tone of voice.
    pub tone: Tone,
    /// Detail dial, 0-10. Clamped by the input surface.
    pub specificity: u8,
    /// Requested output length.
    pub length: Length,
    /// Optional free-text context folded into the placeholder context.
    pub custom_context: Option<String>,
    /// Optional seed for reproducible template selection.
    pub seed: Option<u64>,
    /// Whether the generated text should be appended to the history log.
    pub persist_history: bool,
    /// History directory override for this request.
    pub persist_dir: Option<PathBuf>,
}

impl Default for ExcuseRequest {
    fn default() -> Self {
        Self {
            category: Category::default(),
            audience: Audience::default(),
            tone: Tone::default(),
            specificity: 6,
            length: Length::default(),
            custom_context: None,
            seed: None,
            persist_history: false,
            persist_dir: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_round_trips_through_display_name() {
        for category in Category::all() {
            assert_eq!(Category::from_str(category.as_str()), Some(category));
        }
    }

    #[test]
    fn unknown_category_does_not_parse() {
        assert_eq!(Category::from_str("Dentist"), None);
        assert_eq!(Category::from_str("work deadline"), None);
    }

    #[test]
    fn tone_round_trips_through_display_name() {
        for tone in [
            Tone::Professional,
            Tone::Casual,
            Tone::Sincere,
            Tone::Brief,
            Tone::LightHearted,
        ] {
            assert_eq!(Tone::from_str(tone.as_str()), Some(tone));
        }
    }

    #[test]
    fn default_request_mirrors_the_form_defaults() {
        let request = ExcuseRequest::default();
        assert_eq!(request.category, Category::WorkDeadline);
        assert_eq!(request.audience, Audience::Manager);
        assert_eq!(request.tone, Tone::Professional);
        assert_eq!(request.specificity, 6);
        assert_eq!(request.length, Length::Medium);
        assert!(request.seed.is_none());
        assert!(!request.persist_history);
    }
}
