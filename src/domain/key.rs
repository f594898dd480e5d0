use std::fmt::Display;
use std::hash::Hash;
use std::str::FromStr;

/// How a resource obtains its key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    /// Numeric surrogate assigned by the store on create.
    Generated,
    /// Caller-supplied string that doubles as a business field.
    Natural,
}

/// Key of one resource type. `Display` is the textual form used in error and
/// confirmation messages; `FromStr` parses the query-string form. `Ord` keeps
/// store iteration deterministic.
pub trait ResourceKey:
    Clone + Ord + Hash + Display + FromStr + Send + Sync + 'static
{
    const KIND: KeyKind;

    /// Key value for the given store sequence number; `None` for key types
    /// the store cannot generate.
    fn from_sequence(seq: i64) -> Option<Self>;
}

impl ResourceKey for i64 {
    const KIND: KeyKind = KeyKind::Generated;

    fn from_sequence(seq: i64) -> Option<Self> {
        Some(seq)
    }
}

impl ResourceKey for String {
    const KIND: KeyKind = KeyKind::Natural;

    fn from_sequence(_seq: i64) -> Option<Self> {
        None
    }
}
