//! Discriminated fetch outcomes.

/// Outcome of resolving a subject against an upstream service.
///
/// Absence is a value, not an error: a well-formed "no such subject"
/// response maps to `NotFound` so callers can give the user an informative
/// message, while genuine failures travel as
/// [`FetchError`](crate::FetchError).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fetched<T> {
    /// The subject exists upstream; its decoded record.
    Found(T),
    /// The subject does not exist upstream.
    NotFound,
}

impl<T> Fetched<T> {
    /// True when a record was found.
    pub fn is_found(&self) -> bool {
        matches!(self, Fetched::Found(_))
    }

    /// Map the found record, leaving `NotFound` untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Fetched<U> {
        match self {
            Fetched::Found(record) => Fetched::Found(f(record)),
            Fetched::NotFound => Fetched::NotFound,
        }
    }

    /// Convert into an `Option`, discarding the distinction's name.
    pub fn found(self) -> Option<T> {
        match self {
            Fetched::Found(record) => Some(record),
            Fetched::NotFound => None,
        }
    }
}

impl<T> From<Option<T>> for Fetched<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(record) => Fetched::Found(record),
            None => Fetched::NotFound,
        }
    }
}
