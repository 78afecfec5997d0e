//! Minecraft server address parsing.

use crate::{FetchError, FetchErrorKind};
use derive_getters::Getters;

/// A Minecraft server address: host plus optional port.
///
/// Users supply addresses as `host`, `host port`, or `host:port`. A port
/// embedded in the host string wins over a separately supplied one, matching
/// how players paste addresses from server lists.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct ServerAddress {
    host: String,
    port: Option<u16>,
}

impl ServerAddress {
    /// Parse a user-supplied address, with an optional separate port
    /// argument.
    ///
    /// # Examples
    ///
    /// ```
    /// use netherite_fetch::ServerAddress;
    ///
    /// let addr = ServerAddress::parse("play.example.com:25565", None).unwrap();
    /// assert_eq!(addr.host(), "play.example.com");
    /// assert_eq!(*addr.port(), Some(25565));
    /// ```
    pub fn parse(input: &str, port: Option<u16>) -> Result<Self, FetchError> {
        if let Some((host, embedded)) = input.split_once(':') {
            let embedded: u16 = embedded.parse().map_err(|_| {
                FetchError::new(FetchErrorKind::InvalidSubject(format!(
                    "bad port in address `{input}`"
                )))
            })?;
            if host.is_empty() {
                return Err(FetchError::new(FetchErrorKind::InvalidSubject(format!(
                    "empty host in address `{input}`"
                ))));
            }
            Ok(Self {
                host: host.to_string(),
                port: Some(embedded),
            })
        } else {
            Ok(Self {
                host: input.to_string(),
                port,
            })
        }
    }
}

impl std::fmt::Display for ServerAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.port {
            Some(port) => write!(f, "{}:{}", self.host, port),
            None => write!(f, "{}", self.host),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_host() {
        let addr = ServerAddress::parse("mc.example.com", None).unwrap();
        assert_eq!(addr.host(), "mc.example.com");
        assert_eq!(*addr.port(), None);
        assert_eq!(addr.to_string(), "mc.example.com");
    }

    #[test]
    fn separate_port_argument() {
        let addr = ServerAddress::parse("mc.example.com", Some(25566)).unwrap();
        assert_eq!(*addr.port(), Some(25566));
        assert_eq!(addr.to_string(), "mc.example.com:25566");
    }

    #[test]
    fn embedded_port_wins_over_argument() {
        let addr = ServerAddress::parse("mc.example.com:25565", Some(19132)).unwrap();
        assert_eq!(*addr.port(), Some(25565));
    }

    #[test]
    fn rejects_garbage_port() {
        assert!(ServerAddress::parse("mc.example.com:sljc", None).is_err());
        assert!(ServerAddress::parse("mc.example.com:70000", None).is_err());
    }

    #[test]
    fn rejects_empty_host() {
        assert!(ServerAddress::parse(":25565", None).is_err());
    }
}
