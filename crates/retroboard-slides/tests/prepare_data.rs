//! End-to-end coverage of the slide pipeline over a hand-built entity
//! stream with a known commit distribution.

use retroboard_core::{Comment, Commit, DataError, Entity, Ref, Sprint, Summary, Timestamp, User};
use retroboard_slides::{prepare_data, PrepareOptions, Slide};

// Monday 2020-12-14 00:00:00 UTC, start of the first generated sprint.
const FIRST_SPRINT_START: Timestamp = 1_607_904_000_000;
const WEEK: Timestamp = 7 * 24 * 3_600_000;
const HOUR: Timestamp = 3_600_000;

fn users(amount: u64) -> Vec<Entity> {
    (0..amount)
        .map(|id| {
            Entity::User(User {
                id,
                name: format!("Developer {id}"),
                login: format!("dev{id}"),
                avatar: format!("{id}.jpg"),
                friends: Vec::new(),
                commits: Vec::new(),
                comments: Vec::new(),
            })
        })
        .collect()
}

fn sprints(amount: u64, id_offset: u64) -> Vec<Entity> {
    (0..amount)
        .map(|idx| {
            let start_at = FIRST_SPRINT_START + idx as Timestamp * WEEK;
            Entity::Sprint(Sprint {
                id: id_offset + idx,
                name: format!("Спринт №{}", id_offset + idx),
                start_at,
                finish_at: start_at + WEEK,
            })
        })
        .collect()
}

/// One commit per unit in `distribution[sprint][user]`, spread an hour
/// apart inside each sprint window.
fn commits(distribution: &[Vec<u64>]) -> Vec<Entity> {
    let mut next_id = 0;
    let mut result = Vec::new();
    for (sprint_idx, per_user) in distribution.iter().enumerate() {
        let window_start = FIRST_SPRINT_START + sprint_idx as Timestamp * WEEK;
        let mut slot = 0;
        for (user_idx, &amount) in per_user.iter().enumerate() {
            for _ in 0..amount {
                result.push(Entity::Commit(Commit {
                    id: format!("c{next_id}"),
                    author: Ref::ById(user_idx as u64),
                    message: format!("commit {next_id}"),
                    timestamp: window_start + slot * HOUR,
                    summaries: Vec::new(),
                }));
                next_id += 1;
                slot += 1;
            }
        }
    }
    result
}

fn scenario() -> Vec<Entity> {
    let mut entities = users(3);
    entities.extend(sprints(3, 975));
    entities.extend(commits(&[
        vec![0, 1, 2],
        vec![1, 1, 4],
        vec![22, 2, 11],
    ]));
    entities
}

#[test]
fn five_slides_in_fixed_order() {
    let slides = prepare_data(&scenario(), &PrepareOptions::for_sprint(977)).unwrap();

    let aliases: Vec<&str> = slides.iter().map(Slide::alias).collect();
    assert_eq!(aliases, vec!["leaders", "vote", "chart", "diagram", "activity"]);
}

#[test]
fn leaders_rank_the_distribution_descending() {
    let slides = prepare_data(&scenario(), &PrepareOptions::for_sprint(977)).unwrap();

    let Slide::Leaders(data) = &slides[0] else {
        panic!("expected a leaders slide first");
    };
    assert_eq!(data.subtitle, "Спринт №977");

    let ranked: Vec<(u64, &str)> = data
        .users
        .iter()
        .map(|member| (member.id, member.value_text.as_str()))
        .collect();
    assert_eq!(ranked, vec![(0, "22"), (2, "11"), (1, "2")]);
    assert_eq!(data.users[0].name, "Developer 0");
    assert_eq!(data.users[0].avatar, "0.jpg");
}

#[test]
fn chart_carries_the_whole_timeline_with_the_current_marked() {
    let slides = prepare_data(&scenario(), &PrepareOptions::for_sprint(977)).unwrap();

    let Slide::Chart(data) = &slides[2] else {
        panic!("expected a chart slide third");
    };
    let points: Vec<(&str, u64, Option<bool>)> = data
        .values
        .iter()
        .map(|p| (p.title.as_str(), p.value, p.active))
        .collect();
    assert_eq!(
        points,
        vec![
            ("975", 3, None),
            ("976", 6, None),
            ("977", 35, Some(true)),
        ]
    );
    assert_eq!(data.values[0].hint, "Спринт №975");
    // Top 3 of the same ranking the leaders slide carries in full.
    assert_eq!(data.users.len(), 3);
    assert_eq!(data.users[0].id, 0);
}

#[test]
fn diagram_sums_match_the_sprint_totals() {
    let slides = prepare_data(&scenario(), &PrepareOptions::for_sprint(977)).unwrap();

    let Slide::Diagram(data) = &slides[3] else {
        panic!("expected a diagram slide fourth");
    };
    // Every generated commit has no summaries, so all land in the
    // smallest bucket: 35 now vs 6 last sprint.
    assert_eq!(data.total_text, "35 коммитов");
    assert_eq!(data.difference_text, "+29 коммитов");
    assert_eq!(data.categories[3].value_text, "35 коммитов");
    assert_eq!(data.categories[3].difference_text, "+29 коммитов");
    assert_eq!(data.categories[0].value_text, "0 коммитов");
}

#[test]
fn activity_accounts_for_every_current_sprint_commit() {
    let slides = prepare_data(&scenario(), &PrepareOptions::for_sprint(977)).unwrap();

    let Slide::Activity(data) = &slides[4] else {
        panic!("expected an activity slide last");
    };
    let grid = &data.data;
    let total: u64 = [
        grid.mon, grid.tue, grid.wed, grid.thu, grid.fri, grid.sat, grid.sun,
    ]
    .iter()
    .flatten()
    .sum();
    assert_eq!(total, 35);
    // The sprint starts Monday 00:00 UTC and commits are an hour apart,
    // so the first 24 fill Monday and the rest spill into Tuesday.
    assert_eq!(grid.mon.iter().sum::<u64>(), 24);
    assert_eq!(grid.tue.iter().sum::<u64>(), 11);
}

#[test]
fn vote_slide_ranks_comment_likes() {
    let mut entities = scenario();
    let current_start = FIRST_SPRINT_START + 2 * WEEK;
    entities.push(Entity::Comment(Comment {
        id: "m0".into(),
        author: Ref::ById(1),
        message: "nice".into(),
        created_at: current_start + HOUR,
        likes: vec![Ref::ById(0), Ref::ById(2)],
    }));
    entities.push(Entity::Comment(Comment {
        id: "m1".into(),
        author: Ref::ById(2),
        message: "ship it".into(),
        created_at: current_start + 2 * HOUR,
        likes: vec![Ref::ById(0)],
    }));
    // Older comment: its likes must not leak into the current sprint.
    entities.push(Entity::Comment(Comment {
        id: "m2".into(),
        author: Ref::ById(2),
        message: "old".into(),
        created_at: current_start - WEEK,
        likes: vec![Ref::ById(0), Ref::ById(1)],
    }));

    let slides = prepare_data(&entities, &PrepareOptions::for_sprint(977)).unwrap();

    let Slide::Vote(data) = &slides[1] else {
        panic!("expected a vote slide second");
    };
    let ranked: Vec<(u64, &str)> = data
        .users
        .iter()
        .map(|member| (member.id, member.value_text.as_str()))
        .collect();
    assert_eq!(ranked, vec![(1, "2 голоса"), (2, "1 голос")]);
}

#[test]
fn commit_sizes_resolve_registered_summaries() {
    let mut entities = scenario();
    entities.push(Entity::Summary(Summary {
        id: 1,
        path: "/big.rs".into(),
        added: 900,
        removed: 300,
        comments: Vec::new(),
    }));
    entities.push(Entity::Commit(Commit {
        id: "big".into(),
        author: Ref::ById(0),
        message: "rewrite".into(),
        timestamp: FIRST_SPRINT_START + 2 * WEEK + 100 * HOUR,
        summaries: vec![Ref::ById(1)],
    }));

    let slides = prepare_data(&entities, &PrepareOptions::for_sprint(977)).unwrap();

    let Slide::Diagram(data) = &slides[3] else {
        panic!("expected a diagram slide fourth");
    };
    assert_eq!(data.categories[0].value_text, "1 коммит"); // > 1001 строки
    assert_eq!(data.total_text, "36 коммитов");
}

#[test]
fn repeated_runs_are_byte_identical() {
    let entities = scenario();
    let options = PrepareOptions::for_sprint(977);

    let first = serde_json::to_string(&prepare_data(&entities, &options).unwrap()).unwrap();
    let second = serde_json::to_string(&prepare_data(&entities, &options).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn a_quiet_sprint_produces_empty_slides() {
    let entities = sprints(2, 976);
    let slides = prepare_data(&entities, &PrepareOptions::for_sprint(977)).unwrap();

    let Slide::Leaders(data) = &slides[0] else {
        panic!("expected a leaders slide first");
    };
    assert!(data.users.is_empty());

    let Slide::Diagram(diagram) = &slides[3] else {
        panic!("expected a diagram slide fourth");
    };
    assert_eq!(diagram.total_text, "0 коммитов");
}

#[test]
fn missing_target_sprint_is_fatal() {
    let err = prepare_data(&scenario(), &PrepareOptions::for_sprint(999)).unwrap_err();
    assert_eq!(err, DataError::MissingSprint(999));
}

#[test]
fn missing_previous_sprint_is_fatal() {
    let err = prepare_data(&scenario(), &PrepareOptions::for_sprint(975)).unwrap_err();
    assert_eq!(err, DataError::MissingPreviousSprint(975));
}

#[test]
fn dangling_summary_reference_is_fatal() {
    let mut entities = scenario();
    entities.push(Entity::Commit(Commit {
        id: "broken".into(),
        author: Ref::ById(0),
        message: "?".into(),
        timestamp: FIRST_SPRINT_START + 2 * WEEK,
        summaries: vec![Ref::ById(404)],
    }));

    let err = prepare_data(&entities, &PrepareOptions::for_sprint(977)).unwrap_err();
    assert_eq!(
        err,
        DataError::UnknownSummary {
            commit: "broken".into(),
            summary: 404,
        }
    );
}

#[test]
fn dangling_author_reference_is_fatal() {
    let mut entities = scenario();
    entities.push(Entity::Commit(Commit {
        id: "ghost".into(),
        author: Ref::ById(42),
        message: "?".into(),
        timestamp: FIRST_SPRINT_START + 2 * WEEK,
        summaries: Vec::new(),
    }));

    let err = prepare_data(&entities, &PrepareOptions::for_sprint(977)).unwrap_err();
    assert_eq!(err, DataError::UnknownUser(42));
}

#[test]
fn inline_graph_and_json_stream_agree() {
    // The same data arriving as a nested "full export" payload: the
    // commits hang off their authors instead of the top-level stream.
    let raw = format!(
        r#"[
            {{"type": "Sprint", "id": 976, "name": "прошлый", "startAt": 0, "finishAt": {week}}},
            {{"type": "Sprint", "id": 977, "name": "текущий", "startAt": {week}, "finishAt": {two_weeks}}},
            {{"type": "User", "id": 0, "name": "Developer 0", "login": "dev0", "avatar": "0.jpg",
              "friends": [],
              "commits": [
                {{"id": "c0", "type": "Commit", "author": 0, "message": "m", "timestamp": {inside}, "summaries": []}},
                "c-elsewhere"
              ]}}
        ]"#,
        week = WEEK,
        two_weeks = 2 * WEEK,
        inside = WEEK + HOUR,
    );
    let entities: Vec<Entity> = serde_json::from_str(&raw).unwrap();

    let slides = prepare_data(&entities, &PrepareOptions::for_sprint(977)).unwrap();
    let Slide::Leaders(data) = &slides[0] else {
        panic!("expected a leaders slide first");
    };
    assert_eq!(data.users.len(), 1);
    assert_eq!(data.users[0].value_text, "1");
}
