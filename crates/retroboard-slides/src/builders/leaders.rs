use retroboard_core::Sprint;

use crate::model::{LeadersData, Slide, TeamMember};

/// The commit leaderboard slide.
pub fn leaders_slide(current: &Sprint, leaderboard: Vec<TeamMember>) -> Slide {
    Slide::Leaders(LeadersData {
        title: "Больше всего коммитов".into(),
        subtitle: current.name.clone(),
        emoji: "👑".into(),
        users: leaderboard,
    })
}
