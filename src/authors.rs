//! Commit author identities and order preserving deduplication.
use std::collections::HashSet;

use crate::forge::types::CommitRecord;

/// Derives the identity of a commit's author: the platform login when the
/// commit is linked to an account, otherwise the free-text author name.
pub fn author_identity(commit: &CommitRecord) -> String {
    match commit.author_login.as_deref() {
        Some(login) if !login.is_empty() => login.to_string(),
        _ => commit.author_name.clone(),
    }
}

/// Returns the distinct values of `authors` in first-seen order.
pub fn unique<I, S>(authors: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    authors
        .into_iter()
        .map(Into::into)
        .collect::<AuthorSet>()
        .into_vec()
}

/// Ordered set of author identities. Iteration order is insertion order of
/// the first occurrence of each identity.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AuthorSet {
    authors: Vec<String>,
    seen: HashSet<String>,
}

impl AuthorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an identity, returning false if it was already present.
    pub fn insert(&mut self, author: impl Into<String>) -> bool {
        let author = author.into();

        if self.seen.contains(&author) {
            return false;
        }

        self.seen.insert(author.clone());
        self.authors.push(author);
        true
    }

    /// Appends every identity of `other` not already present.
    pub fn merge(&mut self, other: AuthorSet) {
        self.extend(other.authors);
    }

    pub fn len(&self) -> usize {
        self.authors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.authors.is_empty()
    }

    pub fn contains(&self, author: &str) -> bool {
        self.seen.contains(author)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.authors.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.authors
    }

    pub fn into_vec(self) -> Vec<String> {
        self.authors
    }
}

impl<S: Into<String>> Extend<S> for AuthorSet {
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        for author in iter {
            self.insert(author);
        }
    }
}

impl<S: Into<String>> FromIterator<S> for AuthorSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut set = AuthorSet::new();
        set.extend(iter);
        set
    }
}

impl IntoIterator for AuthorSet {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.authors.into_iter()
    }
}

impl<'a> IntoIterator for &'a AuthorSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.authors.iter()
    }
}
