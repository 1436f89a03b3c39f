//! Aggregate customer rating for a product.

use serde::{Deserialize, Serialize};

/// An aggregate rating as reported by the remote catalog.
///
/// Ratings are read-only: drafts never carry one, and locally applied
/// updates keep the rating the remote last reported.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Average score on the catalog's 0 to 5 scale.
    pub rate: f64,
    /// Number of reviews behind the average.
    pub count: u64,
}
