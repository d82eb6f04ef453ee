//! Static HTML page capability
//!
//! Backs the offline `--from-html` mode and the test suite. The document is
//! parsed once with `scraper`; elements are `ego_tree` node ids into that
//! shared document. There is no layout, so document height follows a scripted
//! per-scroll sequence, and input interactions are recorded instead of
//! mutating the tree.

use anyhow::{Result, anyhow};
use ego_tree::NodeId;
use scraper::{ElementRef, Html, Selector};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::{ElementHandle, PageDriver};

/// An input interaction performed against a snapshot element.
///
/// `target` is `#id` when the element has an id, otherwise its classes
/// sorted and joined as `.a.b`, otherwise the tag name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interaction {
    Click { target: String },
    Clear { target: String },
    Type { target: String, text: String },
}

struct SnapshotState {
    html: Html,
    heights: Vec<u64>,
    scrolls: Cell<usize>,
    visited: RefCell<Vec<String>>,
    interactions: RefCell<Vec<Interaction>>,
}

impl SnapshotState {
    fn element(&self, id: NodeId) -> Result<ElementRef<'_>> {
        self.html
            .tree
            .get(id)
            .and_then(ElementRef::wrap)
            .ok_or_else(|| anyhow!("Snapshot node {id:?} is not an element"))
    }

    fn record(&self, interaction: Interaction) {
        self.interactions.borrow_mut().push(interaction);
    }
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| anyhow!("Invalid CSS selector '{selector}': {e}"))
}

fn describe(element: ElementRef<'_>) -> String {
    let value = element.value();
    if let Some(id) = value.id() {
        return format!("#{id}");
    }
    let mut classes: Vec<&str> = value.classes().collect();
    classes.sort_unstable();
    if classes.is_empty() {
        value.name().to_string()
    } else {
        format!(".{}", classes.join("."))
    }
}

/// A parsed HTML document standing in for a rendered page
#[derive(Clone)]
pub struct SnapshotPage {
    state: Rc<SnapshotState>,
}

impl SnapshotPage {
    /// Parse `html` as a full document with a fixed document height.
    #[must_use]
    pub fn parse(html: &str) -> Self {
        let height = u64::try_from(html.len()).unwrap_or(u64::MAX);
        Self::with_scroll_heights(html, [height])
    }

    /// Parse `html`, reporting `heights[n]` as the document height after `n`
    /// scrolls. The last entry repeats once the sequence is exhausted.
    #[must_use]
    pub fn with_scroll_heights(html: &str, heights: impl IntoIterator<Item = u64>) -> Self {
        let mut heights: Vec<u64> = heights.into_iter().collect();
        if heights.is_empty() {
            heights.push(0);
        }
        Self {
            state: Rc::new(SnapshotState {
                html: Html::parse_document(html),
                heights,
                scrolls: Cell::new(0),
                visited: RefCell::new(Vec::new()),
                interactions: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Number of `scroll_to_bottom` calls so far
    #[must_use]
    pub fn scroll_count(&self) -> usize {
        self.state.scrolls.get()
    }

    #[must_use]
    pub fn interactions(&self) -> Vec<Interaction> {
        self.state.interactions.borrow().clone()
    }

    /// URLs passed to `navigate`, in call order
    #[must_use]
    pub fn visited(&self) -> Vec<String> {
        self.state.visited.borrow().clone()
    }

    fn select_ids(&self, selector: &str) -> Result<Vec<NodeId>> {
        let selector = parse_selector(selector)?;
        Ok(self.state.html.select(&selector).map(|el| el.id()).collect())
    }

    fn wrap(&self, id: NodeId) -> SnapshotElement {
        SnapshotElement {
            state: Rc::clone(&self.state),
            id,
        }
    }
}

/// An element inside a `SnapshotPage`
#[derive(Clone)]
pub struct SnapshotElement {
    state: Rc<SnapshotState>,
    id: NodeId,
}

impl SnapshotElement {
    fn select_ids(&self, selector: &str) -> Result<Vec<NodeId>> {
        let selector = parse_selector(selector)?;
        let element = self.state.element(self.id)?;
        Ok(element.select(&selector).map(|el| el.id()).collect())
    }

    fn wrap(&self, id: NodeId) -> Self {
        Self {
            state: Rc::clone(&self.state),
            id,
        }
    }

    fn target(&self) -> Result<String> {
        Ok(describe(self.state.element(self.id)?))
    }
}

impl ElementHandle for SnapshotElement {
    async fn find_first(&self, selector: &str) -> Result<Option<Self>> {
        Ok(self
            .select_ids(selector)?
            .into_iter()
            .next()
            .map(|id| self.wrap(id)))
    }

    async fn find_all(&self, selector: &str) -> Result<Vec<Self>> {
        Ok(self
            .select_ids(selector)?
            .into_iter()
            .map(|id| self.wrap(id))
            .collect())
    }

    async fn text(&self) -> Result<Option<String>> {
        let element = self.state.element(self.id)?;
        let raw: String = element.text().collect();
        // Collapse markup whitespace the way rendered text would
        Ok(Some(raw.split_whitespace().collect::<Vec<_>>().join(" ")))
    }

    async fn attribute(&self, name: &str) -> Result<Option<String>> {
        let element = self.state.element(self.id)?;
        Ok(element.value().attr(name).map(str::to_owned))
    }

    async fn click(&self) -> Result<()> {
        let target = self.target()?;
        self.state.record(Interaction::Click { target });
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        let target = self.target()?;
        self.state.record(Interaction::Clear { target });
        Ok(())
    }

    async fn type_text(&self, text: &str) -> Result<()> {
        let target = self.target()?;
        self.state.record(Interaction::Type {
            target,
            text: text.to_string(),
        });
        Ok(())
    }
}

impl PageDriver for SnapshotPage {
    type Element = SnapshotElement;

    async fn navigate(&self, url: &str) -> Result<()> {
        self.state.visited.borrow_mut().push(url.to_string());
        Ok(())
    }

    async fn find_first(&self, selector: &str) -> Result<Option<Self::Element>> {
        Ok(self
            .select_ids(selector)?
            .into_iter()
            .next()
            .map(|id| self.wrap(id)))
    }

    async fn find_all(&self, selector: &str) -> Result<Vec<Self::Element>> {
        Ok(self
            .select_ids(selector)?
            .into_iter()
            .map(|id| self.wrap(id))
            .collect())
    }

    async fn document_height(&self) -> Result<u64> {
        let heights = &self.state.heights;
        let index = self.state.scrolls.get().min(heights.len() - 1);
        Ok(heights[index])
    }

    async fn scroll_to_bottom(&self) -> Result<()> {
        self.state.scrolls.set(self.state.scrolls.get() + 1);
        Ok(())
    }
}
