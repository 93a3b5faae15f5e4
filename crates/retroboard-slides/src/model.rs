//! The slide payloads handed to the rendering layer, shaped exactly as the
//! renderer contract expects them on the wire.

use serde::{Deserialize, Serialize};

use retroboard_core::UserId;

// ── Shared pieces ──

/// One ranked row of a leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: UserId,
    pub name: String,
    pub avatar: String,
    #[serde(rename = "valueText")]
    pub value_text: String,
}

/// One chart data point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub title: String,
    pub value: u64,
    pub hint: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

/// One diagram row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub title: String,
    #[serde(rename = "valueText")]
    pub value_text: String,
    #[serde(rename = "differenceText")]
    pub difference_text: String,
}

/// Hour-of-day commit counts for each weekday, Monday first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekGrid {
    pub mon: [u64; 24],
    pub tue: [u64; 24],
    pub wed: [u64; 24],
    pub thu: [u64; 24],
    pub fri: [u64; 24],
    pub sat: [u64; 24],
    pub sun: [u64; 24],
}

// ── Per-slide payloads ──

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadersData {
    pub title: String,
    pub subtitle: String,
    pub emoji: String,
    pub users: Vec<TeamMember>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteData {
    pub title: String,
    pub subtitle: String,
    pub emoji: String,
    pub users: Vec<TeamMember>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartData {
    pub title: String,
    pub subtitle: String,
    pub values: Vec<Period>,
    pub users: Vec<TeamMember>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagramData {
    pub title: String,
    pub subtitle: String,
    #[serde(rename = "totalText")]
    pub total_text: String,
    #[serde(rename = "differenceText")]
    pub difference_text: String,
    pub categories: Vec<Category>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityData {
    pub title: String,
    pub subtitle: String,
    pub data: WeekGrid,
}

/// A finished slide: `{"alias": ..., "data": ...}` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "alias", content = "data", rename_all = "lowercase")]
pub enum Slide {
    Leaders(LeadersData),
    Vote(VoteData),
    Chart(ChartData),
    Diagram(DiagramData),
    Activity(ActivityData),
}

impl Slide {
    /// The template alias the renderer dispatches on.
    pub fn alias(&self) -> &'static str {
        match self {
            Slide::Leaders(_) => "leaders",
            Slide::Vote(_) => "vote",
            Slide::Chart(_) => "chart",
            Slide::Diagram(_) => "diagram",
            Slide::Activity(_) => "activity",
        }
    }
}
