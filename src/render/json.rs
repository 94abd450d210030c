//! JSON-lines renderer for driving another front end over a pipe.

use super::{RenderError, Renderer, Snapshot};
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct Notice<'a> {
    notice: &'a str,
}

/// Writes each snapshot as one JSON object per line.
pub struct JsonRenderer<W: Write> {
    out: W,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line<T: Serialize>(&mut self, value: &T) -> Result<(), RenderError> {
        serde_json::to_writer(&mut self.out, value)?;
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    fn render(&mut self, view: &Snapshot) -> Result<(), RenderError> {
        self.line(view)
    }

    fn notice(&mut self, text: &str) -> Result<(), RenderError> {
        self.line(&Notice { notice: text })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{DivisionGame, GameConfig};

    #[test]
    fn each_frame_is_one_line() {
        let mut game = DivisionGame::new(GameConfig::new(14, 3));
        let mut renderer = JsonRenderer::new(Vec::new());
        renderer.render(&Snapshot::from(&game)).unwrap();
        game.distribute();
        renderer.render(&Snapshot::from(&game)).unwrap();

        let out = String::from_utf8(renderer.into_inner()).unwrap();
        let frames: Vec<Snapshot> = out
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].items_remaining, 14);
        assert_eq!(frames[1].items_remaining, 11);
        assert_eq!(frames[1].items_per_group, 1);
    }

    #[test]
    fn notices_are_tagged() {
        let mut renderer = JsonRenderer::new(Vec::new());
        renderer.notice("unknown command").unwrap();

        let out = String::from_utf8(renderer.into_inner()).unwrap();
        let value: serde_json::Value = serde_json::from_str(out.trim_end()).unwrap();
        assert_eq!(value["notice"], "unknown command");
    }
}
