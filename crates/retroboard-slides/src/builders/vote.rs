use std::collections::HashMap;

use retroboard_core::{DataError, Sprint, User, UserId};

use crate::builders::ranked_members;
use crate::model::{Slide, VoteData};
use crate::plural::{Lexicon, NounCategory};

/// The most-attentive-reviewer slide: users ranked by likes received on
/// their current-sprint comments.
pub fn vote_slide(
    current: &Sprint,
    likes_per_user: &HashMap<UserId, u64>,
    users: &HashMap<UserId, User>,
    lexicon: &Lexicon,
) -> Result<Slide, DataError> {
    let ranked = ranked_members(likes_per_user, users, |count| {
        lexicon.pluralize(count as i64, NounCategory::Votes)
    })?;
    Ok(Slide::Vote(VoteData {
        title: "Самый 🔎 внимательный разработчик".into(),
        subtitle: current.name.clone(),
        emoji: "🔎".into(),
        users: ranked,
    }))
}
