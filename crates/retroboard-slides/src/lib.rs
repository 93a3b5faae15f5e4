//! Turns a flat entity stream into the five retrospective slide payloads.
//!
//! The pipeline is synchronous and I/O free: the walker reconciles the
//! entity graph into flat collections, the aggregator classifies every
//! comment and commit against the sprint windows, and the builders project
//! the aggregates into presentation records.

pub mod builders;
pub mod model;
pub mod plural;

use retroboard_aggregate::{aggregate, EntityBag, SprintIndex};
use retroboard_core::{DataError, Entity, SprintId};

use builders::{
    activity_slide, chart_slide, diagram_slide, leaders_slide, ranked_members, vote_slide,
};

pub use model::{
    ActivityData, Category, ChartData, DiagramData, LeadersData, Period, Slide, TeamMember,
    VoteData, WeekGrid,
};
pub use plural::{pluralize, Lexicon, NounCategory, PluralRule};

/// Caller-supplied knobs for [`prepare_data`]: the target sprint and the
/// word-form table used for slide value texts.
#[derive(Debug, Clone)]
pub struct PrepareOptions {
    pub sprint_id: SprintId,
    pub lexicon: Lexicon,
}

impl PrepareOptions {
    /// Target a sprint with the built-in Russian lexicon.
    pub fn for_sprint(sprint_id: SprintId) -> Self {
        Self {
            sprint_id,
            lexicon: Lexicon::russian(),
        }
    }
}

/// Consume an entity stream and derive the slide data for the target
/// sprint. Always returns exactly five slides, in the order
/// [Leaders, Vote, Chart, Diagram, Activity].
///
/// The target sprint and its predecessor must both be present in the
/// stream; their absence, like any dangling summary or author reference
/// encountered along the way, is a fatal [`DataError`].
pub fn prepare_data(
    entities: &[Entity],
    options: &PrepareOptions,
) -> Result<Vec<Slide>, DataError> {
    let mut bag = EntityBag::new();
    let mut sprints = Vec::new();
    for entity in entities {
        match entity {
            Entity::Sprint(sprint) => sprints.push(sprint.clone()),
            other => bag.absorb(other),
        }
    }

    let timeline = SprintIndex::new(sprints);
    let current = timeline
        .get(options.sprint_id)
        .ok_or(DataError::MissingSprint(options.sprint_id))?;
    let previous = options
        .sprint_id
        .checked_sub(1)
        .and_then(|id| timeline.get(id))
        .ok_or(DataError::MissingPreviousSprint(options.sprint_id))?;

    let stats = aggregate(&bag, &timeline, current, previous)?;
    let leaderboard = ranked_members(&stats.commits_per_user, &bag.users, |count| {
        count.to_string()
    })?;

    Ok(vec![
        leaders_slide(current, leaderboard.clone()),
        vote_slide(current, &stats.likes_per_user, &bag.users, &options.lexicon)?,
        chart_slide(current, &timeline, &stats.commits_per_sprint, &leaderboard),
        diagram_slide(
            current,
            &stats.sizes_current,
            &stats.sizes_previous,
            &options.lexicon,
        ),
        activity_slide(current, &stats.activity),
    ])
}
