//! Demo pages and the button actions they offer.

use core::fmt;

use serde::{Deserialize, Serialize};

use navigation::{Content, Renderable};

/// Pages that can be pushed onto the controller-driven stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageKind {
    /// Root of the controller demo.
    Home,
    /// Pushed from Home.
    Second,
    /// Pushed from Second.
    Third,
}

impl PageKind {
    /// Build the page's content.
    #[must_use]
    pub fn content(self) -> Content {
        match self {
            Self::Home => Box::new(HomePage),
            Self::Second => Box::new(SecondPage),
            Self::Third => Box::new(ThirdPage),
        }
    }

    /// Buttons shown on the page.
    #[must_use]
    pub fn actions(self) -> &'static [PageAction] {
        match self {
            Self::Home => &[PageAction::Push { page: PageKind::Second }],
            Self::Second => &[PageAction::Pop, PageAction::Push { page: PageKind::Third }],
            Self::Third => &[PageAction::Pop, PageAction::PopToRoot],
        }
    }
}

/// Typed routes of the standard (value-based) list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    /// Even rows.
    Item(u32),
    /// Odd rows.
    Product(u32),
}

impl Route {
    /// The route a list row opens: even rows are items, odd rows products.
    #[must_use]
    pub fn for_row(index: u32) -> Self {
        if index % 2 == 0 {
            Self::Item(index)
        } else {
            Self::Product(index)
        }
    }

    /// Destination content for this route.
    #[must_use]
    pub fn content(&self) -> Content {
        match *self {
            Self::Item(id) => Box::new(ItemPage { id }),
            Self::Product(id) => Box::new(ProductPage { id }),
        }
    }
}

/// A button tap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum PageAction {
    /// Push a page onto the controller stack.
    Push {
        /// Page to push.
        page: PageKind,
    },
    /// Pop the controller stack.
    Pop,
    /// Clear the controller stack.
    PopToRoot,
    /// Open a row of the standard list.
    OpenRoute {
        /// Row route.
        route: Route,
    },
    /// Go back one level in the standard list.
    CloseRoute,
}

impl PageAction {
    /// Button label.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Push { .. } => "Push".to_owned(),
            Self::Pop => "Pop".to_owned(),
            Self::PopToRoot => "Pop to root".to_owned(),
            Self::OpenRoute { route } => match route {
                Route::Item(index) | Route::Product(index) => format!("index:{index}"),
            },
            Self::CloseRoute => "Back".to_owned(),
        }
    }
}

fn write_buttons(out: &mut dyn fmt::Write, actions: &[PageAction]) -> fmt::Result {
    for action in actions {
        writeln!(out, "    ( {} )", action.label())?;
    }
    Ok(())
}

/// Root page of the controller demo.
#[derive(Debug, Clone, Copy, Default)]
pub struct HomePage;

impl Renderable for HomePage {
    fn title(&self) -> &str {
        "Home Page"
    }

    fn render(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        write_buttons(out, PageKind::Home.actions())
    }
}

/// Second page: pop back or push the third page.
#[derive(Debug, Clone, Copy, Default)]
pub struct SecondPage;

impl Renderable for SecondPage {
    fn title(&self) -> &str {
        "Second Page"
    }

    fn render(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        write_buttons(out, PageKind::Second.actions())
    }
}

/// Third page: pop one level or all the way to the root.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThirdPage;

impl Renderable for ThirdPage {
    fn title(&self) -> &str {
        "Third Page"
    }

    fn render(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        write_buttons(out, PageKind::Third.actions())
    }
}

/// Detail page for an even row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemPage {
    /// Row index.
    pub id: u32,
}

impl Renderable for ItemPage {
    fn title(&self) -> &str {
        "Item"
    }

    fn render(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        writeln!(out, "    ItemPage {}", self.id)
    }
}

/// Detail page for an odd row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductPage {
    /// Row index.
    pub id: u32,
}

impl Renderable for ProductPage {
    fn title(&self) -> &str {
        "Product"
    }

    fn render(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        writeln!(out, "    ProductPage {}", self.id)
    }
}

/// Root of the standard list: rows `0..=10`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardList;

impl StandardList {
    /// Highest row index.
    pub const LAST_ROW: u32 = 10;

    /// Routes opened by each row, in display order.
    pub fn rows() -> impl Iterator<Item = Route> {
        (0..=Self::LAST_ROW).map(Route::for_row)
    }
}

impl Renderable for StandardList {
    fn title(&self) -> &str {
        "Standard Navigation"
    }

    fn render(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        for route in Self::rows() {
            writeln!(out, "    {}", PageAction::OpenRoute { route }.label())?;
        }
        Ok(())
    }
}
