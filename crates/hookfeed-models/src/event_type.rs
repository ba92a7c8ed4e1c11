use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Kind of a stored webhook event.
///
/// Kinds other than push and pull requests keep the raw GitHub event name,
/// so they can be displayed as-is.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone, Default)]
#[serde(from = "String", into = "String")]
pub enum EventType {
    /// Push.
    #[default]
    Push,
    /// Pull request.
    PullRequest,
    /// Any other GitHub event kind.
    Other(String),
}

impl EventType {
    /// Name used when neither the header nor the payload shape tell the kind.
    pub const UNKNOWN: &'static str = "unknown";

    pub fn as_str(&self) -> &str {
        match self {
            Self::Push => "push",
            Self::PullRequest => "pull_request",
            Self::Other(name) => name,
        }
    }

    pub fn unknown() -> Self {
        Self::Other(Self::UNKNOWN.into())
    }
}

impl Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for EventType {
    fn from(value: &str) -> Self {
        match value.trim() {
            "push" => Self::Push,
            "pull_request" => Self::PullRequest,
            "" => Self::unknown(),
            other => Self::Other(other.to_owned()),
        }
    }
}

impl From<String> for EventType {
    fn from(value: String) -> Self {
        Self::from(&value[..])
    }
}

impl From<EventType> for String {
    fn from(value: EventType) -> Self {
        match value {
            EventType::Other(name) => name,
            known => known.as_str().to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::EventType;

    #[test]
    fn known_names() {
        assert_eq!(EventType::from("push"), EventType::Push);
        assert_eq!(EventType::from("pull_request"), EventType::PullRequest);
        assert_eq!(EventType::PullRequest.as_str(), "pull_request");
    }

    #[test]
    fn other_names_are_kept() {
        assert_eq!(EventType::from("issues"), EventType::Other("issues".into()));
        assert_eq!(EventType::from("issues").to_string(), "issues");
        assert_eq!(EventType::from("  "), EventType::unknown());
    }

    #[test]
    fn serialized_as_plain_string() {
        assert_eq!(
            serde_json::to_string(&EventType::PullRequest).unwrap(),
            r#""pull_request""#
        );
        assert_eq!(
            serde_json::from_str::<EventType>(r#""release""#).unwrap(),
            EventType::Other("release".into())
        );
    }
}
