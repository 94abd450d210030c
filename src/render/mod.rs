//! Renderer seam.
//!
//! The game never draws anything itself. After every applied step the
//! session builds a [`Snapshot`] and hands it to a [`Renderer`], which is free
//! to draw it however it likes: terminal text, JSON for another process, or
//! anything else implementing the trait.

mod error;
mod json;
mod snapshot;
mod text;

pub use error::RenderError;
pub use json::JsonRenderer;
pub use snapshot::Snapshot;
pub use text::TextRenderer;

/// Consumer of game snapshots.
pub trait Renderer {
    /// Draw the current state.
    fn render(&mut self, view: &Snapshot) -> Result<(), RenderError>;

    /// Show a one-off message such as help text. Ignored by default.
    fn notice(&mut self, _text: &str) -> Result<(), RenderError> {
        Ok(())
    }
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn render(&mut self, view: &Snapshot) -> Result<(), RenderError> {
        (**self).render(view)
    }

    fn notice(&mut self, text: &str) -> Result<(), RenderError> {
        (**self).notice(text)
    }
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn render(&mut self, view: &Snapshot) -> Result<(), RenderError> {
        (**self).render(view)
    }

    fn notice(&mut self, text: &str) -> Result<(), RenderError> {
        (**self).notice(text)
    }
}
