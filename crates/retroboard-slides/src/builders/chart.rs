use std::collections::HashMap;

use retroboard_aggregate::SprintIndex;
use retroboard_core::{Sprint, SprintId};

use crate::model::{ChartData, Period, Slide, TeamMember};

/// How many leaderboard rows the chart sidebar shows.
const LEADERBOARD_LIMIT: usize = 3;

/// The commits-per-sprint history slide: one data point per known sprint
/// in ascending start order, plus the top of the commit leaderboard.
pub fn chart_slide(
    current: &Sprint,
    timeline: &SprintIndex,
    commits_per_sprint: &HashMap<SprintId, u64>,
    leaderboard: &[TeamMember],
) -> Slide {
    let values = timeline
        .ordered()
        .iter()
        .map(|sprint| Period {
            title: sprint.id.to_string(),
            value: commits_per_sprint.get(&sprint.id).copied().unwrap_or(0),
            hint: sprint.name.clone(),
            active: (sprint.id == current.id).then_some(true),
        })
        .collect();

    Slide::Chart(ChartData {
        title: "Коммиты".into(),
        subtitle: current.name.clone(),
        values,
        users: leaderboard.iter().take(LEADERBOARD_LIMIT).cloned().collect(),
    })
}
