//! Entity-graph normalization: recursively discover every entity embedded
//! inline under a root and register it into flat output collections.
//!
//! References given only by identifier are never recursed into: the full
//! record is expected to appear elsewhere in the stream, and downstream
//! lookups treat a dangling identifier as their own failure case.

use std::collections::HashMap;

use retroboard_core::{
    Comment, Commit, Entity, Issue, Project, Summary, SummaryId, User, UserId,
};

/// The flat collections produced by walking the entity graph.
///
/// Map-keyed kinds (users, summaries) dedup by identifier, re-registering
/// overwrites. List kinds (commits, comments) may receive duplicates when
/// one entity is embedded under multiple parents; accepted behavior.
#[derive(Debug, Clone, Default)]
pub struct EntityBag {
    pub users: HashMap<UserId, User>,
    pub commits: Vec<Commit>,
    pub comments: Vec<Comment>,
    pub summaries: HashMap<SummaryId, Summary>,
}

impl EntityBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a top-of-stream entity and walk everything embedded in it.
    ///
    /// Projects and issues are containers only: they are walked but never
    /// registered themselves. Sprints carry no nested entities and are
    /// collected by the caller as timeline data.
    pub fn absorb(&mut self, entity: &Entity) {
        match entity {
            Entity::User(user) => {
                self.users.insert(user.id, user.clone());
                self.walk_user(user);
            }
            Entity::Comment(comment) => {
                self.comments.push(comment.clone());
                self.walk_comment(comment);
            }
            Entity::Commit(commit) => {
                self.commits.push(commit.clone());
                self.walk_commit(commit);
            }
            Entity::Summary(summary) => {
                self.summaries.insert(summary.id, summary.clone());
                self.walk_summary(summary);
            }
            Entity::Project(project) => self.walk_project(project),
            Entity::Issue(issue) => self.walk_issue(issue),
            Entity::Sprint(_) => {}
        }
    }

    /// Walk a user's inline friends, commits, and comments.
    pub fn walk_user(&mut self, user: &User) {
        for friend in &user.friends {
            if let Some(friend) = friend.inline() {
                self.users.insert(friend.id, friend.clone());
                self.walk_user(friend);
            }
        }
        for commit in &user.commits {
            if let Some(commit) = commit.inline() {
                self.commits.push(commit.clone());
                self.walk_commit(commit);
            }
        }
        for comment in &user.comments {
            if let Some(comment) = comment.inline() {
                self.comments.push(comment.clone());
                self.walk_comment(comment);
            }
        }
    }

    /// Walk a commit's inline author and summaries.
    pub fn walk_commit(&mut self, commit: &Commit) {
        if let Some(author) = commit.author.inline() {
            self.users.insert(author.id, author.clone());
            self.walk_user(author);
        }
        for summary in &commit.summaries {
            if let Some(summary) = summary.inline() {
                self.summaries.insert(summary.id, summary.clone());
                self.walk_summary(summary);
            }
        }
    }

    /// Walk a comment's inline author and likers. The author is recursed
    /// into but not registered here: authors gain identity where they are
    /// discovered as commit authors or top-of-stream users.
    pub fn walk_comment(&mut self, comment: &Comment) {
        if let Some(author) = comment.author.inline() {
            self.walk_user(author);
        }
        for liker in &comment.likes {
            if let Some(liker) = liker.inline() {
                self.users.insert(liker.id, liker.clone());
                self.walk_user(liker);
            }
        }
    }

    /// Walk a summary's inline comments.
    pub fn walk_summary(&mut self, summary: &Summary) {
        for comment in &summary.comments {
            if let Some(comment) = comment.inline() {
                self.comments.push(comment.clone());
                self.walk_comment(comment);
            }
        }
    }

    /// Walk a project's inline dependencies, issues, and commits.
    pub fn walk_project(&mut self, project: &Project) {
        for dependency in &project.dependencies {
            if let Some(dependency) = dependency.inline() {
                self.walk_project(dependency);
            }
        }
        for issue in &project.issues {
            if let Some(issue) = issue.inline() {
                self.walk_issue(issue);
            }
        }
        for commit in &project.commits {
            if let Some(commit) = commit.inline() {
                self.commits.push(commit.clone());
                self.walk_commit(commit);
            }
        }
    }

    /// Walk an issue's inline comments; an inline resolver is registered
    /// without further recursion.
    pub fn walk_issue(&mut self, issue: &Issue) {
        for comment in &issue.comments {
            if let Some(comment) = comment.inline() {
                self.comments.push(comment.clone());
                self.walk_comment(comment);
            }
        }
        if let Some(resolver) = issue.resolved_by.as_ref().and_then(|r| r.inline()) {
            self.users.insert(resolver.id, resolver.clone());
        }
    }
}
