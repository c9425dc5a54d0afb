//! Game parameters
//!
//! A game is addressed by `seed`, `role`, `lang` and an optional `set`,
//! carried as a URL query string (`/game?seed=A1B2&role=master&lang=en`).
//! Seeds travel verbatim: any printable string survives a round trip.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Language used when the query names none
pub const DEFAULT_LANG: &str = "en";

/// Path of the game page
pub const GAME_PATH: &str = "/game";

/// Errors that can occur while reading game parameters
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParamsError {
    #[error("Missing game code")]
    MissingSeed,

    #[error("Missing role")]
    MissingRole,

    #[error("Invalid role '{value}' (expected 'master' or 'guesser')")]
    InvalidRole { value: String },
}

/// Viewer permission level
///
/// The spymaster (`Master`) sees every tile's team; guessers only see teams
/// of tiles already guessed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Master,
    Guesser,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Master => "master",
            Role::Guesser => "guesser",
        }
    }

    /// Whether this role sees unguessed tiles' teams
    pub fn reveals_key(self) -> bool {
        matches!(self, Role::Master)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "master" => Ok(Role::Master),
            "guesser" => Ok(Role::Guesser),
            other => Err(ParamsError::InvalidRole {
                value: other.to_string(),
            }),
        }
    }
}

/// Everything needed to open one viewer of one game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameParams {
    pub seed: String,
    pub role: Role,
    pub lang: String,

    /// `None` selects the first available set of `lang`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set: Option<String>,
}

impl GameParams {
    pub fn new(seed: impl Into<String>, role: Role, lang: impl Into<String>) -> Self {
        Self {
            seed: seed.into(),
            role,
            lang: lang.into(),
            set: None,
        }
    }

    pub fn with_set(mut self, set: impl Into<String>) -> Self {
        self.set = Some(set.into());
        self
    }

    pub fn with_role(&self, role: Role) -> Self {
        Self {
            role,
            ..self.clone()
        }
    }

    pub fn with_seed(&self, seed: impl Into<String>) -> Self {
        Self {
            seed: seed.into(),
            ..self.clone()
        }
    }

    /// Parse a query string, with or without the leading `?`
    ///
    /// Keys other than `seed`, `role`, `lang` and `set` are ignored. When a
    /// key repeats, the first occurrence wins.
    ///
    /// # Example
    /// ```
    /// use codenames_board_core_rs::{GameParams, Role};
    ///
    /// let params = GameParams::from_query("?seed=A1B2&role=guesser").unwrap();
    /// assert_eq!(params.seed, "A1B2");
    /// assert_eq!(params.role, Role::Guesser);
    /// assert_eq!(params.lang, "en");
    /// assert_eq!(params.set, None);
    /// ```
    pub fn from_query(query: &str) -> Result<Self, ParamsError> {
        let pairs = parse_query(query);
        let lookup = |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str())
                .filter(|v| !v.is_empty())
        };

        let seed = lookup("seed").ok_or(ParamsError::MissingSeed)?;
        let role: Role = lookup("role").ok_or(ParamsError::MissingRole)?.parse()?;
        let lang = lookup("lang").unwrap_or(DEFAULT_LANG);
        let set = lookup("set").map(str::to_string);

        Ok(Self {
            seed: seed.to_string(),
            role,
            lang: lang.to_string(),
            set,
        })
    }

    /// Encode as a query string without the leading `?`
    pub fn to_query(&self) -> String {
        let mut pairs = vec![
            ("seed", self.seed.as_str()),
            ("role", self.role.as_str()),
            ("lang", self.lang.as_str()),
        ];
        if let Some(set) = &self.set {
            pairs.push(("set", set.as_str()));
        }
        pairs
            .into_iter()
            .map(|(key, value)| format!("{}={}", key, encode_component(value)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// `/game?...`
    pub fn game_path(&self) -> String {
        format!("{}?{}", GAME_PATH, self.to_query())
    }

    /// Absolute link for sharing, e.g. `https://host/game?...`
    pub fn share_url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.game_path())
    }
}

/// Split a form-encoded query into decoded key/value pairs
fn parse_query(query: &str) -> Vec<(String, String)> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let (key, value) = part.split_once('=').unwrap_or((part, ""));
            (decode_component(key), decode_component(value))
        })
        .collect()
}

/// Form decoding: `+` is a space, `%XX` a byte; malformed escapes stay
/// literal and invalid UTF-8 is replaced
fn decode_component(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' => {
                match (hex_value(bytes.get(i + 1)), hex_value(bytes.get(i + 2))) {
                    (Some(high), Some(low)) => {
                        out.push((high << 4) | low);
                        i += 3;
                    }
                    _ => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            byte => {
                out.push(byte);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_value(byte: Option<&u8>) -> Option<u8> {
    (*byte? as char).to_digit(16).map(|d| d as u8)
}

/// Form encoding: alphanumerics and `*-._` pass through, space becomes `+`,
/// everything else is percent-encoded
fn encode_component(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'*' | b'-' | b'.' | b'_' => {
                out.push(byte as char)
            }
            b' ' => out.push('+'),
            other => out.push_str(&format!("%{:02X}", other)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_handles_plus_and_escapes() {
        assert_eq!(decode_component("a+b%20c"), "a b c");
        assert_eq!(decode_component("%C5%BC"), "ż");
        assert_eq!(decode_component("100%"), "100%");
        assert_eq!(decode_component("%zz"), "%zz");
    }

    #[test]
    fn test_encode_escapes_reserved() {
        assert_eq!(encode_component("A1B2"), "A1B2");
        assert_eq!(encode_component("a b&c=d"), "a+b%26c%3Dd");
        assert_eq!(encode_component("ż"), "%C5%BC");
    }
}
