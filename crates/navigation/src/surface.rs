//! A navigation surface: root content plus the controller that stacks
//! destinations on top of it.
//!
//! Each surface owns its controller outright. Pages receive the controller by
//! `&mut` from the surface that hosts them rather than looking it up from
//! shared state, so two surfaces (two tabs, or a sheet presenting its own
//! stack) can never observe each other's entries.

use core::fmt;

use crate::config::ControllerConfig;
use crate::content::{Content, Renderable};
use crate::controller::NavigationController;
use crate::stack;

/// Root content with its own navigation stack.
pub struct NavigationSurface {
    root: Content,
    controller: NavigationController,
}

impl NavigationSurface {
    /// Host `root` with a default controller.
    pub fn new<R: Renderable + 'static>(root: R) -> Self {
        Self::with_config(root, ControllerConfig::DEFAULT)
    }

    /// Host `root` with a controller built from `config`.
    pub fn with_config<R: Renderable + 'static>(root: R, config: ControllerConfig) -> Self {
        Self {
            root: Box::new(root),
            controller: NavigationController::with_config(config),
        }
    }

    /// The root content, shown when the stack is empty.
    #[must_use]
    pub fn root(&self) -> &dyn Renderable {
        &*self.root
    }

    /// The surface's controller.
    #[must_use]
    pub fn controller(&self) -> &NavigationController {
        &self.controller
    }

    /// Mutable access for push/pop.
    pub fn controller_mut(&mut self) -> &mut NavigationController {
        &mut self.controller
    }

    /// Title of the visible frame.
    ///
    /// Falls back to the root title when the stack is empty; a top entry
    /// with no destination has no title.
    #[must_use]
    pub fn visible_title(&self) -> Option<String> {
        match self.controller.top() {
            None => Some(self.root.title().to_owned()),
            Some(id) => self
                .controller
                .resolve(&id)
                .map(|content| content.title().to_owned()),
        }
    }

    /// Render the root and every resolved frame.
    ///
    /// # Errors
    ///
    /// Propagates the writer's error.
    pub fn render(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        stack::render_stack(&*self.root, &self.controller.frames(), out)
    }

    /// Render only the visible frame.
    ///
    /// # Errors
    ///
    /// Propagates the writer's error.
    pub fn render_visible(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        stack::render_top(&*self.root, &self.controller.frames(), out)
    }
}

impl fmt::Debug for NavigationSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationSurface")
            .field("root", &self.root.title())
            .field("controller", &self.controller)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::NavigationSurface;
    use crate::config::ControllerConfig;
    use crate::content::Text;

    #[test]
    fn test_surface_shows_root_when_empty() {
        let surface = NavigationSurface::new(Text::new("Home Page", "home"));
        assert_eq!(surface.visible_title().as_deref(), Some("Home Page"));
        assert_eq!(surface.root().title(), "Home Page");
    }

    #[test]
    fn test_surface_visible_title_follows_push_and_pop() {
        let mut surface = NavigationSurface::new(Text::new("Home Page", "home"));
        surface.controller_mut().push(|| Text::new("Second Page", ""));
        assert_eq!(surface.visible_title().as_deref(), Some("Second Page"));

        surface.controller_mut().pop().unwrap();
        assert_eq!(surface.visible_title().as_deref(), Some("Home Page"));
    }

    #[test]
    fn test_surface_render_includes_stack() {
        let mut surface = NavigationSurface::new(Text::new("Home Page", "home"));
        surface.controller_mut().push(|| Text::new("Second Page", "second"));

        let mut out = String::new();
        surface.render(&mut out).unwrap();
        assert_eq!(out, "  [root] Home Page\nhome\n> [0] Second Page\nsecond\n");

        let mut visible = String::new();
        surface.render_visible(&mut visible).unwrap();
        assert_eq!(visible, "> [0] Second Page\nsecond\n");
    }

    #[test]
    fn test_surfaces_are_isolated() {
        let mut first = NavigationSurface::new(Text::new("Tab 1", ""));
        let second = NavigationSurface::with_config(Text::new("Tab 2", ""), ControllerConfig::LENIENT);

        let id = first.controller_mut().push(|| Text::new("Detail", ""));
        assert!(second.controller().resolve(&id).is_none());
        assert!(second.controller().is_empty());
        assert_eq!(second.controller().config(), ControllerConfig::LENIENT);
    }
}
