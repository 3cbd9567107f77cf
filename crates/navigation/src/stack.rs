//! Display adapter: resolves a path into renderable stack frames.
//!
//! A path id with no registry entry yields a frame with no content. The frame
//! renders as nothing and the rest of the stack is unaffected.

use core::fmt;

use crate::content::{Content, Renderable};
use crate::id::NavigationId;
use crate::path::NavigationPath;
use crate::registry::DestinationRegistry;

/// One resolved path entry.
pub struct StackFrame {
    id: NavigationId,
    index: usize,
    top: bool,
    content: Option<Content>,
}

impl StackFrame {
    /// The path id this frame was resolved from.
    #[must_use]
    pub fn id(&self) -> NavigationId {
        self.id
    }

    /// Position in the path, 0 for the entry directly above the root.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether this is the visible (last) frame.
    #[must_use]
    pub fn is_top(&self) -> bool {
        self.top
    }

    /// The resolved content, `None` when the registry had no entry.
    #[must_use]
    pub fn content(&self) -> Option<&dyn Renderable> {
        self.content.as_deref()
    }

    /// Whether the registry entry was missing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_none()
    }
}

impl fmt::Debug for StackFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StackFrame")
            .field("id", &self.id)
            .field("index", &self.index)
            .field("top", &self.top)
            .field("title", &self.content().map(|content| content.title()))
            .finish()
    }
}

/// Resolve every path id, in order, against `registry`.
#[must_use]
pub fn frames(path: &NavigationPath, registry: &DestinationRegistry) -> Vec<StackFrame> {
    let last = path.len().checked_sub(1);
    path.iter()
        .enumerate()
        .map(|(index, id)| {
            let content = registry.resolve(id);
            if content.is_none() {
                tracing::warn!(%id, index, "no destination for path entry; rendering empty frame");
            }
            StackFrame {
                id: *id,
                index,
                top: Some(index) == last,
                content,
            }
        })
        .collect()
}

/// Render the root followed by every frame, top frame last.
///
/// Each section starts with a header line carrying the title; the visible
/// frame is marked with `>`. Frames without content write nothing.
///
/// # Errors
///
/// Propagates the writer's error.
pub fn render_stack(
    root: &dyn Renderable,
    frames: &[StackFrame],
    out: &mut dyn fmt::Write,
) -> fmt::Result {
    write_section(out, frames.is_empty(), "root", root)?;
    for frame in frames {
        if let Some(content) = frame.content() {
            write_section(out, frame.is_top(), &frame.index.to_string(), content)?;
        }
    }
    Ok(())
}

/// Render only the visible frame: the top of the stack, or the root when
/// the stack is empty. A top frame without content renders nothing.
///
/// # Errors
///
/// Propagates the writer's error.
pub fn render_top(
    root: &dyn Renderable,
    frames: &[StackFrame],
    out: &mut dyn fmt::Write,
) -> fmt::Result {
    match frames.last() {
        None => write_section(out, true, "root", root),
        Some(frame) => match frame.content() {
            Some(content) => write_section(out, true, &frame.index.to_string(), content),
            None => Ok(()),
        },
    }
}

pub(crate) fn write_section(
    out: &mut dyn fmt::Write,
    visible: bool,
    label: &str,
    content: &dyn Renderable,
) -> fmt::Result {
    let marker = if visible { '>' } else { ' ' };
    writeln!(out, "{marker} [{label}] {}", content.title())?;
    content.render(out)
}

#[cfg(test)]
mod tests {
    use super::{frames, render_stack, render_top};
    use crate::content::{destination, Text};
    use crate::id::NavigationId;
    use crate::path::NavigationPath;
    use crate::registry::DestinationRegistry;

    fn setup(titles: &[&'static str]) -> (NavigationPath, DestinationRegistry, Vec<NavigationId>) {
        let mut path = NavigationPath::new();
        let mut registry = DestinationRegistry::new();
        let mut ids = Vec::new();
        for title in titles {
            let id = NavigationId::new();
            let title = *title;
            registry.insert(id, destination(move || Text::new(title, format!("{title} body"))));
            path.append(id);
            ids.push(id);
        }
        (path, registry, ids)
    }

    #[test]
    fn test_frames_follow_path_order() {
        let (path, registry, ids) = setup(&["A", "B", "C"]);
        let frames = frames(&path, &registry);
        assert_eq!(frames.len(), 3);
        for (frame, id) in frames.iter().zip(&ids) {
            assert_eq!(frame.id(), *id);
        }
        assert_eq!(frames[2].content().unwrap().title(), "C");
        assert!(frames[2].is_top());
        assert!(!frames[0].is_top());
    }

    #[test]
    fn test_frames_empty_path() {
        let (path, registry, _) = setup(&[]);
        assert!(frames(&path, &registry).is_empty());
    }

    #[test]
    fn test_missing_entry_renders_empty_frame() {
        let (mut path, registry, _) = setup(&["A"]);
        let dangling = NavigationId::new();
        path.append(dangling);

        let frames = frames(&path, &registry);
        assert_eq!(frames.len(), 2);
        assert!(frames[1].is_empty());
        assert!(frames[1].is_top());
        assert!(!frames[0].is_empty());
    }

    #[test]
    fn test_render_stack_marks_top() {
        let (path, registry, _) = setup(&["Second Page", "Third Page"]);
        let root = Text::new("Home Page", "home body");
        let mut out = String::new();
        render_stack(&root, &frames(&path, &registry), &mut out).unwrap();
        assert_eq!(
            out,
            "  [root] Home Page\nhome body\n  [0] Second Page\nSecond Page body\n> [1] Third Page\nThird Page body\n"
        );
    }

    #[test]
    fn test_render_stack_skips_missing_frames() {
        let (mut path, registry, _) = setup(&["A"]);
        path.append(NavigationId::new());
        let root = Text::new("Root", "r");
        let mut out = String::new();
        render_stack(&root, &frames(&path, &registry), &mut out).unwrap();
        assert_eq!(out, "  [root] Root\nr\n  [0] A\nA body\n");
    }

    #[test]
    fn test_render_top_shows_root_when_empty() {
        let (path, registry, _) = setup(&[]);
        let root = Text::new("Root", "r");
        let mut out = String::new();
        render_top(&root, &frames(&path, &registry), &mut out).unwrap();
        assert_eq!(out, "> [root] Root\nr\n");
    }

    #[test]
    fn test_render_top_shows_last_frame() {
        let (path, registry, _) = setup(&["A", "B"]);
        let root = Text::new("Root", "r");
        let mut out = String::new();
        render_top(&root, &frames(&path, &registry), &mut out).unwrap();
        assert_eq!(out, "> [1] B\nB body\n");
    }
}
