//! Human-readable rendering of decoded outcomes

use super::types::{GameOutcome, GameType};

const MINE: char = '*';
const SAFE: char = '.';

/// Render an outcome for display.
///
/// Mines boards are drawn one row per line; every other game shows its
/// canonical result string.
pub fn render(outcome: &GameOutcome, game: GameType) -> String {
    match (game, outcome.grid.as_ref()) {
        (GameType::Mines, Some(grid)) => grid
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| if *cell == 1 { MINE } else { SAFE })
                    .map(String::from)
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n"),
        _ => outcome.result.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::mines::{self, MinesOptions};
    use crate::games::types::GameOutcome;

    #[test]
    fn test_mines_grid() {
        let outcome = mines::process(
            "529b778e19d71a10d5d76b86:placeholder:38",
            &MinesOptions::new(5, 5),
        )
        .unwrap();
        let expected = [
            ". . . . .",
            ". . . . .",
            ". * . * *",
            "* . . . .",
            ". . . * .",
        ]
        .join("\n");
        assert_eq!(render(&outcome, GameType::Mines), expected);
    }

    #[test]
    fn test_plain_result() {
        let outcome = GameOutcome::single_draw("s:c:1", "27", 0.74);
        assert_eq!(render(&outcome, GameType::Roulette), "27");
    }
}
