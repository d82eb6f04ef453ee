//! Page capability used by the scrape flow
//!
//! The flow only ever needs a handful of browser operations: navigate, look
//! elements up (on the page or inside an element), read text and attributes,
//! click/clear/type, and two scripted scroll primitives. They are expressed as
//! two traits so the same extraction code runs against a live Chromium page
//! (`cdp`) and against a parsed HTML document (`snapshot`).
//!
//! "Not found" is always `Ok(None)` / an empty `Vec`. An `Err` means the
//! backend itself failed and is never treated as a missing element.

pub mod cdp;
pub mod snapshot;

pub use cdp::{CdpElement, CdpPage};
pub use snapshot::{Interaction, SnapshotElement, SnapshotPage};

use anyhow::Result;

/// An element reference valid for the current extraction pass.
#[allow(async_fn_in_trait)]
pub trait ElementHandle: Sized {
    /// First descendant matching `selector`, scoped to this element's subtree
    async fn find_first(&self, selector: &str) -> Result<Option<Self>>;

    /// All descendants matching `selector`, in document order
    async fn find_all(&self, selector: &str) -> Result<Vec<Self>>;

    /// Rendered text, `None` when the backend has no text for the node
    async fn text(&self) -> Result<Option<String>>;

    /// Attribute value, `None` when the attribute is absent
    async fn attribute(&self, name: &str) -> Result<Option<String>>;

    async fn click(&self) -> Result<()>;

    /// Clear the value of an input control
    async fn clear(&self) -> Result<()>;

    async fn type_text(&self, text: &str) -> Result<()>;
}

/// The currently rendered document.
#[allow(async_fn_in_trait)]
pub trait PageDriver {
    type Element: ElementHandle;

    async fn navigate(&self, url: &str) -> Result<()>;

    async fn find_first(&self, selector: &str) -> Result<Option<Self::Element>>;

    async fn find_all(&self, selector: &str) -> Result<Vec<Self::Element>>;

    /// Total document height (`document.body.scrollHeight`)
    async fn document_height(&self) -> Result<u64>;

    /// Scroll the window to the current bottom of the document
    async fn scroll_to_bottom(&self) -> Result<()>;
}
