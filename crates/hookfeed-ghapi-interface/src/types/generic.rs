use serde::{Deserialize, Serialize};

use super::common::{GhRepository, GhUser};

/// Fields shared by every GitHub webhook payload.
///
/// Used for event kinds without a dedicated type, so every field is optional.
#[derive(Debug, Deserialize, Serialize, Default, Clone, Eq, PartialEq)]
pub struct GhGenericEvent {
    /// Sender.
    #[serde(default)]
    pub sender: Option<GhUser>,
    /// Repository.
    #[serde(default)]
    pub repository: Option<GhRepository>,
}
