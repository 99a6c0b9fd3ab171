use rubberband::Arrangement;

/// Menu shown before every prompt.
pub const MENU: &str = "\
Select arrangement:
1. Series
2. Parallel
3. Combined
4. Show comparison plot
5. Exit";

/// A recognised menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Compute the force for one arrangement.
    Simulate(Arrangement),
    /// Write the comparison chart.
    ShowComparison,
    /// Leave the session.
    Exit,
}

impl MenuChoice {
    /// Interpret one line of user input.
    ///
    /// Returns `None` for anything that is not a menu number; the session
    /// ignores such input without comment.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Simulate(Arrangement::Series)),
            "2" => Some(Self::Simulate(Arrangement::Parallel)),
            "3" => Some(Self::Simulate(Arrangement::Combined)),
            "4" => Some(Self::ShowComparison),
            "5" => Some(Self::Exit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("1", MenuChoice::Simulate(Arrangement::Series); "series")]
    #[test_case("2", MenuChoice::Simulate(Arrangement::Parallel); "parallel")]
    #[test_case("3\n", MenuChoice::Simulate(Arrangement::Combined); "combined with newline")]
    #[test_case("4", MenuChoice::ShowComparison; "comparison")]
    #[test_case(" 5 ", MenuChoice::Exit; "exit with padding")]
    fn recognises_menu_numbers(input: &str, expected: MenuChoice) {
        assert_eq!(MenuChoice::parse(input), Some(expected));
    }

    #[test_case(""; "empty")]
    #[test_case("6"; "out of range")]
    #[test_case("series"; "word")]
    #[test_case("1.0"; "decimal")]
    fn ignores_everything_else(input: &str) {
        assert_eq!(MenuChoice::parse(input), None);
    }

    #[test]
    fn menu_lists_every_arrangement() {
        for arrangement in Arrangement::ALL {
            assert!(MENU.contains(arrangement.label()));
        }
    }
}
