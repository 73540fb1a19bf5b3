//! Version tokens, revisions and the versioned-value wrapper.
//!
//! A [`VersionToken`] is an opaque stamp that consumers compare instead of
//! deep-comparing a whole node. Tokens carry the compared data itself behind
//! reference counting, so cloning is O(1), equality has a pointer fast path,
//! and two tokens are equal exactly when the state they stamp is equal.

use crate::model::LayoutSpec;
use std::fmt;
use std::sync::Arc;

/// Opaque, comparable stamp of a value's observable state.
///
/// # Equality Semantics
/// Tokens of different kinds (content vs. layout vs. revision) never compare
/// equal. Composite tokens compare element-wise.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionToken(TokenRepr);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum TokenRepr {
    Content(Arc<str>),
    Layout(Option<LayoutSpec>),
    Revision(Revision),
    Composite(Arc<[VersionToken]>),
}

impl VersionToken {
    /// Token defined by text content (content equality, not identity).
    pub fn from_content(content: Arc<str>) -> Self {
        Self(TokenRepr::Content(content))
    }

    /// Token defined by an optional layout snapshot.
    pub fn from_layout(layout: Option<LayoutSpec>) -> Self {
        Self(TokenRepr::Layout(layout))
    }

    /// Token defined by a mutation counter.
    pub fn from_revision(revision: Revision) -> Self {
        Self(TokenRepr::Revision(revision))
    }

    /// Combine child tokens into one. Order matters.
    pub fn combine(parts: impl IntoIterator<Item = VersionToken>) -> Self {
        Self(TokenRepr::Composite(parts.into_iter().collect()))
    }
}

impl fmt::Display for VersionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            TokenRepr::Content(content) => write!(f, "content({} bytes)", content.len()),
            TokenRepr::Layout(Some(_)) => write!(f, "layout"),
            TokenRepr::Layout(None) => write!(f, "layout(none)"),
            TokenRepr::Revision(rev) => write!(f, "rev{}", rev.get()),
            TokenRepr::Composite(parts) => {
                write!(f, "[")?;
                for (i, part) in parts.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{part}")?;
                }
                write!(f, "]")
            }
        }
    }
}

/// Monotonically increasing mutation counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Revision(u64);

impl Revision {
    /// Revision of a node that has never been mutated.
    pub const INITIAL: Self = Self(0);

    /// Get the raw counter value.
    pub fn get(&self) -> u64 {
        self.0
    }

    /// The following revision, saturating at `u64::MAX`.
    pub fn next(&self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Sum of two counters. Monotonic in both arguments.
    pub(crate) fn combined(&self, other: Revision) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

/// Capability of reporting a comparable snapshot token.
pub trait Versionable {
    /// Token for the current observable state.
    fn version_token(&self) -> VersionToken;
}

impl Versionable for LayoutSpec {
    fn version_token(&self) -> VersionToken {
        VersionToken::from_layout(Some(*self))
    }
}

impl Versionable for Option<LayoutSpec> {
    fn version_token(&self) -> VersionToken {
        VersionToken::from_layout(*self)
    }
}

/// A value paired with the token captured when it was wrapped.
///
/// Never mutates after capture. To record a new state, construct a new
/// `VersionedValue`.
#[derive(Debug, Clone)]
pub struct VersionedValue<T> {
    value: T,
    token: VersionToken,
}

impl<T: Versionable> VersionedValue<T> {
    /// Wrap `value`, capturing its current token.
    pub fn new(value: T) -> Self {
        let token = value.version_token();
        Self { value, token }
    }

    /// True if `current` still has the token captured here.
    pub fn is_current_for(&self, current: &T) -> bool {
        self.token == current.version_token()
    }
}

impl<T> VersionedValue<T> {
    /// The wrapped value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The token captured at wrap time.
    pub fn token(&self) -> &VersionToken {
        &self.token
    }

    /// True if both wrappers carry the same token.
    pub fn same_version(&self, other: &VersionedValue<T>) -> bool {
        self.token == other.token
    }

    /// Unwrap, discarding the token.
    pub fn into_inner(self) -> T {
        self.value
    }
}
