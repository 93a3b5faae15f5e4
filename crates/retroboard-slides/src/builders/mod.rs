//! One builder per slide kind. Each is a pure projection from aggregator
//! output into a presentation record.

mod activity;
mod chart;
mod diagram;
mod leaders;
mod vote;

pub use activity::activity_slide;
pub use chart::chart_slide;
pub use diagram::diagram_slide;
pub use leaders::leaders_slide;
pub use vote::vote_slide;

use std::collections::HashMap;

use retroboard_core::{DataError, User, UserId};

use crate::model::TeamMember;

/// Rank users by a count, descending, ties broken by ascending id.
/// Only users with a nonzero count are emitted; a ranked id with no
/// registered user is a fatal inconsistency in the entity stream.
pub(crate) fn ranked_members(
    counts: &HashMap<UserId, u64>,
    users: &HashMap<UserId, User>,
    mut value_text: impl FnMut(u64) -> String,
) -> Result<Vec<TeamMember>, DataError> {
    let mut ranked: Vec<(UserId, u64)> = counts
        .iter()
        .filter(|&(_, &count)| count > 0)
        .map(|(&id, &count)| (id, count))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    ranked
        .into_iter()
        .map(|(id, count)| {
            let user = users.get(&id).ok_or(DataError::UnknownUser(id))?;
            Ok(TeamMember {
                id,
                name: user.name.clone(),
                avatar: user.avatar.clone(),
                value_text: value_text(count),
            })
        })
        .collect()
}
