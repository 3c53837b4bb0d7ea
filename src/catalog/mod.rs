//! The template catalog: category -> tone -> phrase templates.
//!
//! The catalog is a read-only lookup structure loaded once at generator
//! construction. Both levels are explicitly ordered vectors rather than hash
//! maps: unknown-tone fallback resolves to the *first* tone defined for a
//! category, and that ordering must be deterministic.
//!
//! # Fallback
//!
//! - Unknown category -> "General"
//! - Unknown tone -> first tone of the resolved category, in insertion order
//!
//! Lookup is keyed by display-name strings so that arbitrary caller input
//! resolves through the fallback chain; the typed request enums feed it via
//! `as_str()`.

use crate::error::{AlibiError, Result};

/// The category every unknown category resolves to.
pub const FALLBACK_CATEGORY: &str = "General";

/// Templates for one tone within a category.
#[derive(Debug, Clone)]
pub struct ToneTemplates {
    /// Tone display name (e.g., "Professional").
    pub tone: String,
    /// Ordered phrase templates with `{placeholder}` slots.
    pub templates: Vec<String>,
}

/// Templates for one scenario category.
#[derive(Debug, Clone)]
pub struct CategoryTemplates {
    /// Category display name (e.g., "Work Deadline").
    pub category: String,
    /// Tones in insertion order. The first entry is the fallback tone.
    pub tones: Vec<ToneTemplates>,
}

/// The full template catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<CategoryTemplates>,
}

impl Catalog {
    /// Build a catalog from explicit entries. Call [`Catalog::validate`]
    /// before using it for lookups.
    pub fn new(categories: Vec<CategoryTemplates>) -> Self {
        Self { categories }
    }

    /// The built-in catalog.
    pub fn builtin() -> Self {
        Self::new(vec![
            category(
                "General",
                vec![
                    tone(
                        "Professional",
                        &[
                            "Sorry for the short notice. Something unexpected came up, so I can't {action} by {timeframe}. I'll share a simple plan and new time.",
                            "Apologies—an issue popped up and needs my attention. I'll update on {deliverable} by {new_time}.",
                        ],
                    ),
                    tone(
                        "Casual",
                        &[
                            "Sorry—something came up, so I can't {action} today. Can we do {new_time}?",
                            "Hey, quick heads-up: I'm tied up last minute. Can we move {action} to {new_time}?",
                        ],
                    ),
                    tone(
                        "Sincere",
                        &[
                            "Thanks for understanding. A personal thing came up, so I can't {action} as planned. I'll follow up by {new_time}.",
                        ],
                    ),
                    tone(
                        "Brief",
                        &["Sorry—unexpected issue. Can't {action} by {timeframe}. Update by {new_time}."],
                    ),
                    tone(
                        "Light-hearted",
                        &["Looks like I double-booked myself. Can we move {action} to {new_time}?"],
                    ),
                ],
            ),
            category(
                "Work Deadline",
                vec![
                    tone(
                        "Professional",
                        &[
                            "I hit a blocker on {deliverable}. I won't make today's deadline. I'll send a simple plan and new ETA by {new_time}.",
                        ],
                    ),
                    tone(
                        "Sincere",
                        &[
                            "I'm sorry—something urgent slowed down {deliverable}. I'll focus on it and share a new time by {new_time}.",
                        ],
                    ),
                    tone(
                        "Brief",
                        &["Delay on {deliverable} due to a blocker. New ETA {new_time}."],
                    ),
                ],
            ),
            category(
                "School Assignment",
                vec![
                    tone(
                        "Professional",
                        &[
                            "I ran into an issue and need a short extension for {deliverable}. I can submit by {new_time} if that's okay.",
                        ],
                    ),
                    tone(
                        "Sincere",
                        &[
                            "A personal situation came up and I couldn't finish {deliverable}. May I submit by {new_time}?",
                        ],
                    ),
                ],
            ),
            category(
                "Social Event",
                vec![
                    tone(
                        "Casual",
                        &[
                            "I'm really sorry—I can't make it to {event} tonight. Can we catch up this weekend?",
                        ],
                    ),
                    tone(
                        "Light-hearted",
                        &["My day did a plot twist. I have to miss {event}. Rain check for {new_time}?"],
                    ),
                ],
            ),
            category(
                "Appointment",
                vec![tone(
                    "Professional",
                    &[
                        "I need to reschedule today's appointment due to a conflict. Could we move it to {new_time}?",
                    ],
                )],
            ),
            category(
                "Travel/Commute",
                vec![
                    tone(
                        "Professional",
                        &[
                            "Travel delays are slowing me down. I should be there by {new_time}. Sorry for the hassle.",
                        ],
                    ),
                    tone("Brief", &["Running late due to traffic. ETA {new_time}."]),
                ],
            ),
        ])
    }

    /// Validate the catalog invariants.
    ///
    /// Every category must define at least one tone with at least one
    /// template, and the fallback category must exist. A violation is a
    /// configuration error, fatal at generator construction.
    pub fn validate(&self) -> Result<()> {
        if self.categories.is_empty() {
            return Err(AlibiError::CatalogError("catalog has no categories".to_string()));
        }

        if !self.categories.iter().any(|c| c.category == FALLBACK_CATEGORY) {
            return Err(AlibiError::CatalogError(format!(
                "fallback category '{}' is not defined",
                FALLBACK_CATEGORY
            )));
        }

        for category in &self.categories {
            if category.tones.is_empty() {
                return Err(AlibiError::CatalogError(format!(
                    "category '{}' has no tones",
                    category.category
                )));
            }
            for tone in &category.tones {
                if tone.templates.is_empty() {
                    return Err(AlibiError::CatalogError(format!(
                        "category '{}' tone '{}' has no templates",
                        category.category, tone.tone
                    )));
                }
            }
        }

        Ok(())
    }

    /// Look up the template list for a category/tone pair.
    ///
    /// Unknown categories resolve to [`FALLBACK_CATEGORY`]; unknown tones
    /// resolve to the first tone of the resolved category. On a validated
    /// catalog the returned slice is never empty.
    pub fn lookup(&self, category: &str, tone: &str) -> &[String] {
        let resolved = self
            .categories
            .iter()
            .find(|c| c.category == category)
            .or_else(|| self.categories.iter().find(|c| c.category == FALLBACK_CATEGORY));

        let Some(entry) = resolved else {
            return &[];
        };

        entry
            .tones
            .iter()
            .find(|t| t.tone == tone)
            .or_else(|| entry.tones.first())
            .map(|t| t.templates.as_slice())
            .unwrap_or(&[])
    }
}

fn category(name: &str, tones: Vec<ToneTemplates>) -> CategoryTemplates {
    CategoryTemplates {
        category: name.to_string(),
        tones,
    }
}

fn tone(name: &str, templates: &[&str]) -> ToneTemplates {
    ToneTemplates {
        tone: name.to_string(),
        templates: templates.iter().map(|t| t.to_string()).collect(),
    }
}
