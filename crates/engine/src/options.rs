//! Option records exchanged with the engine
//!
//! Both records are the flat, serializable objects the engine consumes;
//! field names serialize in camelCase to match its wire format.

/// How pages are laid out in the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PageViewMode {
    SinglePage,
    Spread,
    AutoSpread,
}

/// UI-editable viewer configuration
///
/// The synchronization layer observes this record and pushes the whole
/// snapshot to the engine whenever it changes.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewerOptions {
    /// Render every page up front instead of on demand
    pub render_all_pages: bool,

    /// Page layout mode
    pub page_view_mode: PageViewMode,

    /// Zoom factor (1.0 = 100%)
    pub zoom: f64,

    /// Base font size in points
    pub font_size: f64,

    /// Collect and report timing diagnostics after load
    pub profile: bool,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            render_all_pages: true,
            page_view_mode: PageViewMode::AutoSpread,
            zoom: 1.0,
            font_size: 16.0,
            profile: false,
        }
    }
}

impl ViewerOptions {
    /// Replace this record in place with the contents of another
    ///
    /// Used when a new document load supplies fresh options.
    pub fn copy_from(&mut self, other: &ViewerOptions) {
        *self = other.clone();
    }
}

/// Description of the document or EPUB to load
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentOptions {
    /// URL of a plain document; takes priority over `epub_url` when both are set
    pub url: Option<String>,

    /// URL of an EPUB publication
    pub epub_url: Option<String>,

    /// Content-fragment identifier marking a position within the document
    ///
    /// Written back as the reading position moves, so the record that
    /// requested the load also describes where the reader now is.
    pub fragment: Option<String>,
}

impl DocumentOptions {
    /// Options for loading a plain document by URL
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }

    /// Options for loading an EPUB publication by URL
    pub fn with_epub_url(epub_url: impl Into<String>) -> Self {
        Self {
            epub_url: Some(epub_url.into()),
            ..Self::default()
        }
    }
}
