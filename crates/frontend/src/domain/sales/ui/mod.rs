use contracts::enums::Condition;

pub mod details;
pub mod form;
pub mod list;

/// Badge variant for a condition label. The set of conditions is open:
/// anything outside the known set gets the "Usado" styling.
pub fn condition_badge_variant(condition: &str) -> &'static str {
    match Condition::from_label(condition) {
        Some(Condition::Novo) => "success",
        Some(Condition::Seminovo) => "primary",
        Some(Condition::Usado) | None => "warning",
        Some(Condition::Recondicionado) => "accent",
    }
}

#[cfg(test)]
mod tests {
    use super::condition_badge_variant;

    #[test]
    fn known_conditions_have_their_own_style() {
        assert_eq!(condition_badge_variant("Novo"), "success");
        assert_eq!(condition_badge_variant("Seminovo"), "primary");
        assert_eq!(condition_badge_variant("Usado"), "warning");
        assert_eq!(condition_badge_variant("Recondicionado"), "accent");
    }

    #[test]
    fn unknown_conditions_fall_back_to_the_default_style() {
        assert_eq!(condition_badge_variant("Tela quebrada"), "warning");
        assert_eq!(condition_badge_variant(""), "warning");
    }
}
