use serde::{Deserialize, Serialize};
use std::fmt;

/// Known device conditions. Records store the condition as free text — this
/// set only drives the select options and the badge styling; anything
/// outside it is still a valid value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Condition {
    Novo,
    Seminovo,
    Usado,
    Recondicionado,
}

impl Condition {
    pub fn label(&self) -> &'static str {
        match self {
            Condition::Novo => "Novo",
            Condition::Seminovo => "Seminovo",
            Condition::Usado => "Usado",
            Condition::Recondicionado => "Recondicionado",
        }
    }

    pub fn all() -> Vec<Condition> {
        vec![
            Condition::Novo,
            Condition::Seminovo,
            Condition::Usado,
            Condition::Recondicionado,
        ]
    }

    /// Exact label match; unknown labels are simply not in the known set.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Novo" => Some(Condition::Novo),
            "Seminovo" => Some(Condition::Seminovo),
            "Usado" => Some(Condition::Usado),
            "Recondicionado" => Some(Condition::Recondicionado),
            _ => None,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip() {
        for condition in Condition::all() {
            assert_eq!(Condition::from_label(condition.label()), Some(condition));
        }
    }

    #[test]
    fn unknown_labels_stay_outside_the_known_set() {
        assert_eq!(Condition::from_label("Tela quebrada"), None);
        assert_eq!(Condition::from_label("novo"), None);
    }
}
