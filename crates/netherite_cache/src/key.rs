//! Composite cache keys.

use derive_getters::Getters;

/// Cache key composed of a service namespace and a subject identifier.
///
/// The rendered form is `namespace:subject`, matching the store wire
/// contract. Uniqueness is only required within a namespace; case
/// sensitivity follows the subject's own identity rules and is not enforced
/// here.
///
/// # Examples
///
/// ```
/// use netherite_cache::LookupKey;
///
/// let key = LookupKey::new("server", "play.example.com");
/// assert_eq!(key.to_string(), "server:play.example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display, Getters)]
#[display("{}:{}", namespace, subject)]
pub struct LookupKey {
    namespace: String,
    subject: String,
}

impl LookupKey {
    /// Create a key from a service namespace and a subject identifier.
    pub fn new(namespace: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            subject: subject.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composes_namespace_and_subject() {
        let key = LookupKey::new("username", "Notch");
        assert_eq!(key.namespace(), "username");
        assert_eq!(key.subject(), "Notch");
        assert_eq!(key.to_string(), "username:Notch");
    }

    #[test]
    fn subjects_may_contain_separators() {
        // Server addresses carry their own colon; only the first segment is
        // the namespace.
        let key = LookupKey::new("server", "play.example.com:25565");
        assert_eq!(key.to_string(), "server:play.example.com:25565");
    }
}
