//! Typed command and event surface of the document rendering engine
//!
//! The engine itself is an external collaborator; this crate defines the
//! trait it is consumed through, the tagged event union it produces, and
//! the option records exchanged with it.

pub mod event;
pub mod options;

pub use event::{EngineEvent, NavPayload};
pub use options::{DocumentOptions, PageViewMode, ViewerOptions};

/// Document lifecycle state reported by the engine
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReadyState {
    /// Document is being loaded or no document is loaded yet
    #[default]
    Loading,

    /// First pages are displayable, loading continues in the background
    Interactive,

    /// Document fully loaded and paginated
    Complete,

    /// Loading failed
    Error,
}

/// Direction pages advance in, as declared by the document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PageProgression {
    #[default]
    Ltr,
    Rtl,
}

/// Zoom factor kinds the engine can be queried for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomMode {
    Percent,
    FitPage,
    FitWidth,
}

/// Target of a page navigation request
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavigationTarget {
    Previous,
    Next,
    Left,
    Right,
    First,
    Last,

    /// An explicit engine-native page coordinate
    Epage(f64),
}

/// Command surface of the rendering engine
///
/// All operations are synchronous requests; the engine may complete them
/// asynchronously and reports progress through the events drained by
/// `poll_event`. None of the operations can fail locally, so none return
/// a `Result`.
pub trait Engine {
    /// Load a plain document by URL
    fn load_document(
        &mut self,
        url: &str,
        document_options: &DocumentOptions,
        viewer_options: &ViewerOptions,
    );

    /// Load an EPUB publication by URL
    fn load_epub(
        &mut self,
        epub_url: &str,
        document_options: &DocumentOptions,
        viewer_options: &ViewerOptions,
    );

    /// Replace the engine's viewer options with a whole new snapshot
    fn set_options(&mut self, options: &ViewerOptions);

    /// Navigate to a page by direction or explicit coordinate
    fn navigate_to_page(&mut self, target: NavigationTarget);

    /// Navigate to a link target within the loaded document
    fn navigate_to_internal_url(&mut self, href: &str);

    /// Query the current zoom factor of the given kind
    fn query_zoom_factor(&self, mode: ZoomMode) -> f64;

    /// Page progression of the currently loaded document
    ///
    /// Only meaningful once the engine has reported an Interactive or
    /// Complete ready state.
    fn current_page_progression(&self) -> PageProgression;

    /// Current document lifecycle state
    fn ready_state(&self) -> ReadyState;

    /// Ask the engine to print its timing diagnostics
    fn print_timings(&mut self);

    /// Take the next pending event, if any
    fn poll_event(&mut self) -> Option<EngineEvent>;
}
