//! Lifecycle status of a plan action.
//!
//! Statuses are stored as their Portuguese display labels (the same strings
//! the `plano_anual.status` CHECK constraint accepts), so the serialized form
//! and the database form are identical.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Status of a `plano_anual` row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanoStatus {
    #[default]
    #[serde(rename = "Planejado")]
    Planejado,
    #[serde(rename = "Em andamento")]
    EmAndamento,
    #[serde(rename = "Concluído")]
    Concluido,
    #[serde(rename = "Atrasado")]
    Atrasado,
}

impl PlanoStatus {
    /// Every status, in the order screens present them.
    pub const ALL: [PlanoStatus; 4] = [
        PlanoStatus::Planejado,
        PlanoStatus::EmAndamento,
        PlanoStatus::Concluido,
        PlanoStatus::Atrasado,
    ];

    /// The stored and displayed label.
    pub fn as_str(self) -> &'static str {
        match self {
            PlanoStatus::Planejado => "Planejado",
            PlanoStatus::EmAndamento => "Em andamento",
            PlanoStatus::Concluido => "Concluído",
            PlanoStatus::Atrasado => "Atrasado",
        }
    }
}

impl fmt::Display for PlanoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlanoStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PlanoStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| CoreError::Validation(format!("Unknown status '{s}'")))
    }
}

/// Lets `sqlx` decode the TEXT column via `#[sqlx(try_from = "String")]`.
impl TryFrom<String> for PlanoStatus {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
