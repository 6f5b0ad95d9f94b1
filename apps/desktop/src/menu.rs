use shared::domain::ComparisonChoice;

/// One line typed at the comparison prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Compare(ComparisonChoice),
    StartOver,
    Quit,
}

pub fn parse_menu_command(line: &str) -> Result<MenuCommand, String> {
    let line = line.trim();
    if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
        return Ok(MenuCommand::Quit);
    }
    if line.eq_ignore_ascii_case("r") || line.eq_ignore_ascii_case("restart") {
        return Ok(MenuCommand::StartOver);
    }
    line.parse::<ComparisonChoice>().map(MenuCommand::Compare)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognises_control_words_case_insensitively() {
        assert_eq!(parse_menu_command(" Q "), Ok(MenuCommand::Quit));
        assert_eq!(parse_menu_command("quit"), Ok(MenuCommand::Quit));
        assert_eq!(parse_menu_command("R"), Ok(MenuCommand::StartOver));
        assert_eq!(parse_menu_command("restart"), Ok(MenuCommand::StartOver));
    }

    #[test]
    fn anything_else_is_a_comparison_choice() {
        assert_eq!(
            parse_menu_command("h"),
            Ok(MenuCommand::Compare(ComparisonChoice::Harder))
        );
        assert_eq!(
            parse_menu_command("between"),
            Ok(MenuCommand::Compare(ComparisonChoice::Between))
        );
        assert!(parse_menu_command("sideways").is_err());
    }
}
