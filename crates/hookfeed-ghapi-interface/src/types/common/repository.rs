use serde::{Deserialize, Serialize};

/// GitHub Repository.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhRepository {
    /// Name.
    pub name: String,
    /// Full name.
    #[serde(default)]
    pub full_name: String,
    /// Default branch.
    pub default_branch: Option<String>,
}
