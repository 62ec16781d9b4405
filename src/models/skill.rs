use serde::{Deserialize, Serialize};

/// Action categories that carry an efficiency rule set. Every other label
/// (Block, Set, Dig, Freeball, ...) passes through unrated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Skill {
    Serve,
    Reception,
    Attack,
    Other(String),
}

impl Skill {
    /// Labels are matched exactly as they appear in match exports.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Serve" => Skill::Serve,
            "Reception" => Skill::Reception,
            "Attack" => Skill::Attack,
            other => Skill::Other(other.to_string()),
        }
    }
}
