//! Plain-text renderer for terminals.

use super::{RenderError, Renderer, Snapshot};
use std::io::Write;

const APPLE: char = '●';

/// Draws each snapshot as a block of lines.
///
/// ```text
/// 14 ÷ 3 = ?
/// Basket 1: ●●●● (4)
/// Basket 2: ●●●● (4)
/// Basket 3: ●●●● (4)
/// Pile: ●● (2)
/// > check <quotient> <remainder>
/// ```
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

fn apples(count: u32) -> String {
    std::iter::repeat(APPLE).take(count as usize).collect()
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, view: &Snapshot) -> Result<(), RenderError> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", view.equation)?;

        for basket in 1..=view.divisor {
            writeln!(
                self.out,
                "Basket {basket}: {} ({})",
                apples(view.items_per_group),
                view.items_per_group
            )?;
        }

        if view.items_remaining == 0 {
            writeln!(self.out, "Pile: All apples distributed!")?;
        } else {
            writeln!(
                self.out,
                "Pile: {} ({})",
                apples(view.items_remaining),
                view.items_remaining
            )?;
        }

        if let (Some(solution), Some(explanation)) = (&view.solution, &view.explanation) {
            writeln!(self.out, "Correct! {solution}")?;
            writeln!(self.out, "{explanation}")?;
            writeln!(self.out, "> restart")?;
        } else if view.shows_distribute() {
            writeln!(self.out, "> distribute")?;
        } else if view.shows_guess_form() {
            writeln!(self.out, "> check <quotient> <remainder>")?;
        }

        if view.shows_error() {
            writeln!(self.out, "Not quite. Count the baskets and the pile again!")?;
        }

        self.out.flush()?;
        Ok(())
    }

    fn notice(&mut self, text: &str) -> Result<(), RenderError> {
        writeln!(self.out, "{text}")?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{DivisionGame, GameConfig};

    fn draw(game: &DivisionGame) -> String {
        let mut renderer = TextRenderer::new(Vec::new());
        renderer.render(&Snapshot::from(game)).unwrap();
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn draws_one_line_per_basket() {
        let mut game = DivisionGame::new(GameConfig::new(14, 3));
        game.distribute();
        let text = draw(&game);

        assert!(text.contains("14 ÷ 3 = ?"));
        assert!(text.contains("Basket 1: ● (1)"));
        assert!(text.contains("Basket 3: ● (1)"));
        assert!(!text.contains("Basket 4"));
        assert!(text.contains("Pile: ●●●●●●●●●●● (11)"));
        assert!(text.contains("> distribute"));
    }

    #[test]
    fn empty_pile_says_so() {
        let mut game = DivisionGame::new(GameConfig::new(6, 3));
        game.distribute();
        game.distribute();
        let text = draw(&game);

        assert!(text.contains("Pile: All apples distributed!"));
        assert!(text.contains("> check <quotient> <remainder>"));
    }

    #[test]
    fn wrong_guess_shows_error_line() {
        let mut game = DivisionGame::new(GameConfig::new(2, 3));
        game.check_answer(1, 1);
        let text = draw(&game);

        assert!(text.contains("Not quite."));
        assert!(text.contains("> check"));
    }

    #[test]
    fn success_shows_solution_and_explanation() {
        let mut game = DivisionGame::new(GameConfig::new(7, 2));
        while game.distribute().is_applied() {}
        game.check_answer(3, 1);
        let text = draw(&game);

        assert!(text.contains("Correct! 7 ÷ 2 = 3 R 1"));
        assert!(text.contains("we had 1 apple left over"));
        assert!(text.contains("> restart"));
        assert!(!text.contains("> check"));
    }

    #[test]
    fn notice_is_written_verbatim() {
        let mut renderer = TextRenderer::new(Vec::new());
        renderer.notice("hello").unwrap();
        assert_eq!(renderer.into_inner(), b"hello\n");
    }
}
