use serde::{Deserialize, Serialize};

use crate::refs::{Identified, Ref};

/// Milliseconds since the Unix epoch.
pub type Timestamp = i64;

pub type UserId = u64;
pub type SprintId = u64;
pub type SummaryId = u64;
pub type CommitId = String;
pub type CommentId = String;
pub type ProjectId = String;
pub type IssueId = String;

/// A team member. Full-export payloads may embed the member's commits and
/// comments; both lists decode as empty when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub login: String,
    pub avatar: String,
    #[serde(default)]
    pub friends: Vec<Ref<User>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub commits: Vec<Ref<Commit>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<Ref<Comment>>,
}

/// A comment left on a commit summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub author: Ref<User>,
    pub message: String,
    #[serde(rename = "createdAt")]
    pub created_at: Timestamp,
    pub likes: Vec<Ref<User>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Commit {
    pub id: CommitId,
    pub author: Ref<User>,
    pub message: String,
    pub timestamp: Timestamp,
    pub summaries: Vec<Ref<Summary>>,
}

/// Per-path change summary of a commit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub id: SummaryId,
    pub path: String,
    pub added: u64,
    pub removed: u64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<Ref<Comment>>,
}

/// A fixed half-open time window `[startAt, finishAt)` with a display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sprint {
    pub id: SprintId,
    pub name: String,
    #[serde(rename = "startAt")]
    pub start_at: Timestamp,
    #[serde(rename = "finishAt")]
    pub finish_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    #[serde(default)]
    pub dependencies: Vec<Ref<Project>>,
    #[serde(default)]
    pub issues: Vec<Ref<Issue>>,
    #[serde(default)]
    pub commits: Vec<Ref<Commit>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub id: IssueId,
    pub name: String,
    #[serde(default)]
    pub comments: Vec<Ref<Comment>>,
    #[serde(
        rename = "resolvedBy",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub resolved_by: Option<Ref<User>>,
}

/// Any record of the entity stream, tagged by kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Entity {
    User(User),
    Comment(Comment),
    Commit(Commit),
    Summary(Summary),
    Sprint(Sprint),
    Project(Project),
    Issue(Issue),
}

macro_rules! impl_identified {
    ($($kind:ty => $id:ty),* $(,)?) => {
        $(impl Identified for $kind {
            type Id = $id;

            fn id(&self) -> Self::Id {
                self.id.clone()
            }
        })*
    };
}

impl_identified! {
    User => UserId,
    Comment => CommentId,
    Commit => CommitId,
    Summary => SummaryId,
    Sprint => SprintId,
    Project => ProjectId,
    Issue => IssueId,
}
