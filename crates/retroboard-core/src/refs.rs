use serde::{Deserialize, Serialize};

/// An entity kind with a stable identifier.
pub trait Identified {
    type Id: std::fmt::Debug + Clone + Eq + std::hash::Hash;

    fn id(&self) -> Self::Id;
}

/// A reference to an entity: either the full record embedded inline, or a
/// bare identifier pointing at a record registered elsewhere in the stream.
///
/// Deserialized untagged: a JSON object is an inline entity, a bare
/// number/string is an identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    untagged,
    bound(
        serialize = "T: Serialize, T::Id: Serialize",
        deserialize = "T: Deserialize<'de>, T::Id: Deserialize<'de>"
    )
)]
pub enum Ref<T: Identified> {
    Inline(T),
    ById(T::Id),
}

impl<T: Identified> Ref<T> {
    /// Unwrap the reference to its identifier, whichever form it takes.
    pub fn id(&self) -> T::Id {
        match self {
            Ref::Inline(entity) => entity.id(),
            Ref::ById(id) => id.clone(),
        }
    }

    /// The embedded entity, when the reference carries one inline.
    pub fn inline(&self) -> Option<&T> {
        match self {
            Ref::Inline(entity) => Some(entity),
            Ref::ById(_) => None,
        }
    }
}
