//! Package recommendations
//!
//! Recommendations combine two external collaborators: a text-completion
//! service that suggests package names for a free-text description, and a
//! registry statistics service that reports how popular each package is.
//! Both are modeled as traits; this crate ships no network-backed
//! implementation and the scoring engine never calls into this module.
//!
//! [`recommend`] asks the completion source for candidates, looks up each
//! candidate's popularity, and returns the most popular few.

use crate::Result;
use ohno::app_err;
use serde::{Deserialize, Serialize};

const LOG_TARGET: &str = " recommend";

/// Upper bound on the number of recommendations returned.
pub const MAX_RECOMMENDATIONS: usize = 5;

/// Produces free-text completions, one suggested package name per line.
pub trait CompletionSource {
    /// # Errors
    ///
    /// Returns an error if the completion service cannot be reached or refuses the prompt
    fn complete(&self, prompt: &str) -> Result<String>;
}

/// Reports how often a package was downloaded over the last month.
pub trait PopularitySource {
    /// # Errors
    ///
    /// Returns an error if the statistics for `package` cannot be retrieved
    fn monthly_downloads(&self, package: &str) -> Result<u64>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub name: String,
    pub popularity: u64,
}

/// Recommend packages for `description`, most popular first.
///
/// A candidate whose popularity cannot be retrieved is kept with a popularity of zero.
///
/// # Errors
///
/// Returns an error if `description` is blank or the completion source fails
pub fn recommend<C, P>(description: &str, completion: &C, popularity: &P) -> Result<Vec<Recommendation>>
where
    C: CompletionSource + ?Sized,
    P: PopularitySource + ?Sized,
{
    let description = description.trim();
    if description.is_empty() {
        return Err(app_err!("a description is required"));
    }

    let prompt = format!("Recommend {MAX_RECOMMENDATIONS} packages based on the following description:\n\n{description}");
    let text = completion.complete(&prompt)?;

    let mut recommendations: Vec<_> = text
        .lines()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| {
            let downloads = popularity.monthly_downloads(name).unwrap_or_else(|e| {
                log::debug!(target: LOG_TARGET, "No popularity for '{name}': {e:#}");
                0
            });
            Recommendation {
                name: name.to_string(),
                popularity: downloads,
            }
        })
        .collect();

    recommendations.sort_by(|a, b| b.popularity.cmp(&a.popularity));
    recommendations.truncate(MAX_RECOMMENDATIONS);

    Ok(recommendations)
}
