//! Strongly-typed neighborhood name and its file-name form.

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::ops::Deref;

/// Display name of a neighborhood, as stored in the neighborhoods layer.
///
/// Names are unique within a run and double as file keys through
/// [`NeighborhoodName::file_stem`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NeighborhoodName(String);

impl NeighborhoodName {
    /// Create a new `NeighborhoodName`, panicking in debug builds if the name is empty.
    ///
    /// Prefer [`try_new`](Self::try_new) when handling untrusted input.
    pub fn new(name: impl Into<String>) -> Self {
        let s = name.into();
        debug_assert!(!s.is_empty(), "NeighborhoodName must not be empty");
        Self(s)
    }

    /// Try to create a new `NeighborhoodName`, returning `None` if the name is empty.
    pub fn try_new(name: impl Into<String>) -> Option<Self> {
        let s = name.into();
        if s.is_empty() {
            None
        } else {
            Some(Self(s))
        }
    }

    /// Return the underlying name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name stem shared by the description file and the generated profiles.
    pub fn file_stem(&self) -> String {
        sanitize(&self.0)
    }
}

impl fmt::Display for NeighborhoodName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NeighborhoodName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Deref for NeighborhoodName {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for NeighborhoodName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for NeighborhoodName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for NeighborhoodName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Turn a neighborhood name into a file-name-safe stem.
///
/// Spaces become underscores, `&` and `/` are dropped, and any run of
/// underscores left behind collapses to one. Idempotent.
pub fn sanitize(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        let c = match c {
            '&' | '/' => continue,
            ' ' => '_',
            other => other,
        };
        if c == '_' && out.ends_with('_') {
            continue;
        }
        out.push(c);
    }
    out
}

/// Deduplicate raw names read from the neighborhoods layer.
///
/// Empty names are skipped. The result is sorted. Two distinct names with
/// the same [`sanitize`]d form would overwrite each other's profiles and
/// are rejected.
pub fn dedup_names<I, S>(raw: I) -> CoreResult<Vec<NeighborhoodName>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut unique = BTreeSet::new();
    for name in raw {
        match NeighborhoodName::try_new(name) {
            Some(n) => {
                unique.insert(n);
            }
            None => log::warn!("Skipping neighborhood feature with an empty name"),
        }
    }

    let mut stems: HashMap<String, &NeighborhoodName> = HashMap::new();
    for name in &unique {
        let stem = name.file_stem();
        if let Some(first) = stems.get(&stem) {
            return Err(CoreError::DuplicateName {
                first: first.to_string(),
                second: name.to_string(),
                file_stem: stem,
            });
        }
        stems.insert(stem, name);
    }

    Ok(unique.into_iter().collect())
}

#[cfg(test)]
#[path = "name_test.rs"]
mod tests;
