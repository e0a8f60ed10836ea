use std::fmt;

use serde::{Deserialize, Serialize};

/// Top-level classification branch selected early in the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkType {
    Procedimiento,
    Proyecto,
    Seguro,
}

impl WorkType {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "procedimiento" => Some(Self::Procedimiento),
            "proyecto" => Some(Self::Proyecto),
            "seguro" | "seguros" => Some(Self::Seguro),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Procedimiento => "procedimiento",
            Self::Proyecto => "proyecto",
            Self::Seguro => "seguros",
        }
    }
}

impl fmt::Display for WorkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
