use serde::{Deserialize, Serialize};

/// One extracurricular offering and its roster.
///
/// `participants` keeps insertion order; emails are unique per activity.
/// `max_participants` is informational only and not enforced on signup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}
