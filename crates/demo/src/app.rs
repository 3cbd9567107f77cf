//! Demo application state: one controller-driven surface and one standard
//! (typed route) stack, side by side.

use core::fmt;
use std::cell::Cell;
use std::rc::Rc;

use navigation::{
    ControllerConfig, NavigationError, NavigationSurface, Renderable, RouteDestinations,
    RouteStack,
};

use crate::pages::{HomePage, PageAction, Route, StandardList};

/// Outcome of running a sequence of actions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Actions accepted by their stack.
    pub applied: usize,
    /// Actions rejected with an error (empty-stack pops).
    pub rejected: usize,
}

/// Both demo stacks plus a shared change counter fed by their observers.
pub struct DemoApp {
    surface: NavigationSurface,
    standard: RouteStack<Route>,
    destinations: RouteDestinations<Route>,
    changes: Rc<Cell<usize>>,
}

impl DemoApp {
    /// Build the demo with the given controller configuration.
    #[must_use]
    pub fn new(config: ControllerConfig) -> Self {
        let changes = Rc::new(Cell::new(0_usize));

        let mut surface = NavigationSurface::with_config(HomePage, config);
        let counter = Rc::clone(&changes);
        surface.controller_mut().subscribe(move |event| {
            counter.set(counter.get().saturating_add(1));
            tracing::info!(count = event.depth(), "controller path changed");
        });

        let mut standard = RouteStack::with_empty_pop(config.empty_pop);
        let counter = Rc::clone(&changes);
        standard.subscribe(move |event| {
            counter.set(counter.get().saturating_add(1));
            tracing::info!(count = event.depth(), "path changed");
        });

        Self {
            surface,
            standard,
            destinations: RouteDestinations::new(Route::content),
            changes,
        }
    }

    /// Apply one button tap.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::EmptyStack`] when popping an empty stack
    /// under the strict empty-pop policy.
    pub fn dispatch(&mut self, action: PageAction) -> Result<(), NavigationError> {
        tracing::debug!(action = %action.label(), "dispatch");
        match action {
            PageAction::Push { page } => {
                self.surface.controller_mut().push(move || page.content());
            }
            PageAction::Pop => {
                self.surface.controller_mut().pop()?;
            }
            PageAction::PopToRoot => self.surface.controller_mut().pop_to_root(),
            PageAction::OpenRoute { route } => self.standard.push(route),
            PageAction::CloseRoute => {
                self.standard.pop()?;
            }
        }
        Ok(())
    }

    /// Apply every action in order. Errors are logged and counted, never fatal.
    pub fn run<'a, I>(&mut self, actions: I) -> RunReport
    where
        I: IntoIterator<Item = &'a PageAction>,
    {
        let mut report = RunReport::default();
        for action in actions {
            match self.dispatch(*action) {
                Ok(()) => report.applied = report.applied.saturating_add(1),
                Err(err) => {
                    tracing::warn!(action = %action.label(), error = %err, "action rejected");
                    report.rejected = report.rejected.saturating_add(1);
                }
            }
        }
        report
    }

    /// The controller-driven surface.
    #[must_use]
    pub fn surface(&self) -> &NavigationSurface {
        &self.surface
    }

    /// The standard route stack.
    #[must_use]
    pub fn standard(&self) -> &RouteStack<Route> {
        &self.standard
    }

    /// Number of path changes observed across both stacks.
    #[must_use]
    pub fn change_count(&self) -> usize {
        self.changes.get()
    }

    /// Render both stacks.
    ///
    /// # Errors
    ///
    /// Propagates the writer's error.
    pub fn render(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        writeln!(out, "== Navigation controller ==")?;
        self.surface.render(out)?;
        writeln!(out, "== Standard navigation ==")?;
        self.destinations
            .render_stack(&StandardList, self.standard.routes(), out)
    }

    /// Render only the visible frame of each stack.
    ///
    /// # Errors
    ///
    /// Propagates the writer's error.
    pub fn render_visible(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        self.surface.render_visible(out)?;
        match self.standard.top() {
            Some(route) => {
                let content = self.destinations.resolve(route);
                writeln!(out, "> {}", content.title())?;
                content.render(out)
            }
            None => writeln!(out, "> {}", StandardList.title()),
        }
    }
}

impl Default for DemoApp {
    fn default() -> Self {
        Self::new(ControllerConfig::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::{DemoApp, RunReport};
    use crate::pages::{PageAction, PageKind, Route};
    use navigation::{ControllerConfig, NavigationError};

    fn push(page: PageKind) -> PageAction {
        PageAction::Push { page }
    }

    #[test]
    fn test_app_starts_at_home() {
        let app = DemoApp::default();
        assert_eq!(app.surface().visible_title().as_deref(), Some("Home Page"));
        assert!(app.standard().is_empty());
        assert_eq!(app.change_count(), 0);
    }

    #[test]
    fn test_app_push_second_then_third() {
        let mut app = DemoApp::default();
        app.dispatch(push(PageKind::Second)).unwrap();
        app.dispatch(push(PageKind::Third)).unwrap();
        assert_eq!(app.surface().controller().depth(), 2);
        assert_eq!(app.surface().visible_title().as_deref(), Some("Third Page"));
    }

    #[test]
    fn test_app_pop_to_root_from_third() {
        let mut app = DemoApp::default();
        app.run(&[push(PageKind::Second), push(PageKind::Third), PageAction::PopToRoot]);
        assert!(app.surface().controller().is_empty());
        assert_eq!(app.change_count(), 3);
    }

    #[test]
    fn test_app_empty_pop_rejected() {
        let mut app = DemoApp::default();
        assert_eq!(app.dispatch(PageAction::Pop), Err(NavigationError::EmptyStack));
        assert_eq!(app.dispatch(PageAction::CloseRoute), Err(NavigationError::EmptyStack));
    }

    #[test]
    fn test_app_lenient_empty_pop_is_applied() {
        let mut app = DemoApp::new(ControllerConfig::LENIENT);
        let report = app.run(&[PageAction::Pop, PageAction::CloseRoute]);
        assert_eq!(report, RunReport { applied: 2, rejected: 0 });
        assert_eq!(app.change_count(), 0);
    }

    #[test]
    fn test_app_run_counts_rejections() {
        let mut app = DemoApp::default();
        let report = app.run(&[push(PageKind::Second), PageAction::Pop, PageAction::Pop]);
        assert_eq!(report, RunReport { applied: 2, rejected: 1 });
    }

    #[test]
    fn test_app_standard_routes() {
        let mut app = DemoApp::default();
        app.run(&[
            PageAction::OpenRoute { route: Route::for_row(3) },
            PageAction::OpenRoute { route: Route::for_row(4) },
            PageAction::CloseRoute,
        ]);
        assert_eq!(app.standard().routes(), &[Route::Product(3)]);

        let mut out = String::new();
        app.render_visible(&mut out).unwrap();
        assert!(out.ends_with("> Product\n    ProductPage 3\n"));
    }

    #[test]
    fn test_app_render_lists_both_stacks() {
        let mut app = DemoApp::default();
        app.dispatch(push(PageKind::Second)).unwrap();
        let mut out = String::new();
        app.render(&mut out).unwrap();
        assert!(out.starts_with("== Navigation controller ==\n  [root] Home Page\n"));
        assert!(out.contains("> [0] Second Page\n    ( Pop )\n    ( Push )\n"));
        assert!(out.contains("== Standard navigation ==\n> [root] Standard Navigation\n"));
    }
}
