//! Renderable content and the type-erased factories stored in the registry.

use core::fmt;

/// Anything the display layer can show as a stack frame.
pub trait Renderable {
    /// Navigation title for the frame. Empty when the content has none.
    fn title(&self) -> &str {
        ""
    }

    /// Write the frame body as text.
    fn render(&self, out: &mut dyn fmt::Write) -> fmt::Result;
}

impl<R: Renderable + ?Sized> Renderable for Box<R> {
    fn title(&self) -> &str {
        (**self).title()
    }

    fn render(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        (**self).render(out)
    }
}

/// Type-erased renderable content produced by a [`Destination`].
pub type Content = Box<dyn Renderable>;

/// Zero-argument factory producing the content for one path entry.
pub type Destination = Box<dyn Fn() -> Content>;

/// Erase a concrete content factory into a [`Destination`].
pub fn destination<F, R>(factory: F) -> Destination
where
    F: Fn() -> R + 'static,
    R: Renderable + 'static,
{
    Box::new(move || -> Content { Box::new(factory()) })
}

/// Plain titled text. Handy for tests and placeholder frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    title: String,
    body: String,
}

impl Text {
    /// Create text content with a title and a single body line.
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// The body line.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }
}

impl Renderable for Text {
    fn title(&self) -> &str {
        &self.title
    }

    fn render(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        writeln!(out, "{}", self.body)
    }
}
