//! Excuse generation pipeline.
//!
//! The [`Generator`] owns the template catalog and the random source and
//! orchestrates one generation call: reseed (when a seed was requested),
//! select a template, build the placeholder context, render leniently, and
//! apply the length policy.
//!
//! Seed-based determinism covers template selection and the Long closing
//! phrase only; the time-derived context fields follow the wall clock unless
//! the caller pins it via [`Generator::generate_at`].

pub mod context;
pub mod length;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::request::ExcuseRequest;
use crate::template::render_lenient;
use chrono::{Local, NaiveDateTime};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

pub use context::build_context;
pub use length::adjust_length;

/// Orchestrator for excuse generation.
///
/// Not designed for concurrent use: one generation call completes fully
/// before the next. Concurrent callers should hold independent generators.
pub struct Generator {
    catalog: Catalog,
    rng: SmallRng,
}

impl Generator {
    /// Create a generator over the built-in catalog.
    ///
    /// Fails with a catalog error if the catalog violates the "every
    /// resolved category has at least one template" invariant. This is the
    /// only fatal startup path.
    pub fn new() -> Result<Self> {
        Self::with_catalog(Catalog::builtin())
    }

    /// Create a generator over an explicit catalog, validating it first.
    pub fn with_catalog(catalog: Catalog) -> Result<Self> {
        catalog.validate()?;
        Ok(Self {
            catalog,
            rng: SmallRng::from_entropy(),
        })
    }

    /// The catalog this generator selects from.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Generate an excuse for the request, using the current wall clock for
    /// the time-derived context values.
    pub fn generate(&mut self, request: &ExcuseRequest) -> String {
        self.generate_at(request, Local::now().naive_local())
    }

    /// Generate an excuse with an explicit clock.
    pub fn generate_at(&mut self, request: &ExcuseRequest, now: NaiveDateTime) -> String {
        if let Some(seed) = request.seed {
            self.rng = SmallRng::seed_from_u64(seed);
        }
        self.run_pipeline(request, now)
    }

    /// Re-roll the excuse for the same request.
    ///
    /// Seeds with `seed + 1` when a seed is present, so a rephrase is
    /// reproducible yet distinct from the same-seed [`Generator::generate`]
    /// call. The prior text is accepted but not consulted; rephrasing is a
    /// full independent re-generation today.
    pub fn rephrase(&mut self, request: &ExcuseRequest, prior_text: &str) -> String {
        self.rephrase_at(request, prior_text, Local::now().naive_local())
    }

    /// Re-roll with an explicit clock.
    pub fn rephrase_at(
        &mut self,
        request: &ExcuseRequest,
        _prior_text: &str,
        now: NaiveDateTime,
    ) -> String {
        if let Some(seed) = request.seed {
            self.rng = SmallRng::seed_from_u64(seed.wrapping_add(1));
        }
        self.run_pipeline(request, now)
    }

    fn run_pipeline(&mut self, request: &ExcuseRequest, now: NaiveDateTime) -> String {
        let template = self.select_template(request.category.as_str(), request.tone.as_str());
        let context = build_context(request, now);
        let text = render_lenient(&template, &context);
        adjust_length(&text, request.length, &mut self.rng)
    }

    /// Pick one template uniformly from the fallback-resolved list.
    fn select_template(&mut self, category: &str, tone: &str) -> String {
        let templates = self.catalog.lookup(category, tone);
        match templates.choose(&mut self.rng) {
            Some(template) => {
                tracing::debug!(category, tone, template = %template, "selected template");
                template.clone()
            }
            // Unreachable on a validated catalog.
            None => String::new(),
        }
    }
}
