//! The viewer synchronization component
//!
//! Bridges the engine's event stream into the observable state store and
//! translates UI commands into engine calls. Engine events are drained
//! through explicit handler methods; nothing here registers callbacks.

use std::sync::{Arc, Mutex};
use std::time::Instant;

use log::{debug, error, info, warn};
use pageturn_engine::{
    DocumentOptions, Engine, EngineEvent, NavPayload, NavigationTarget, ReadyState, ViewerOptions,
    ZoomMode,
};
use pageturn_reactive::{Observable, Subscription};

use crate::page_numbers;
use crate::state::ViewerState;

/// Shared handle to the options describing the active document
///
/// The caller that requested the load keeps a clone and observes fragment
/// write-backs as the reading position moves.
pub type DocumentOptionsHandle = Arc<Mutex<DocumentOptions>>;

/// Handles hyperlinks that leave the document
pub trait ExternalNavigator {
    fn navigate(&mut self, href: &str);
}

/// `ExternalNavigator` that drops external links
///
/// For embedders with no outward navigation surface.
pub struct NoopNavigator;

impl ExternalNavigator for NoopNavigator {
    fn navigate(&mut self, _href: &str) {}
}

/// Synchronization layer between the engine and the UI state model
///
/// Owns the engine handle and the observable state; the host event loop
/// calls `pump_events` and `tick` once per cycle.
pub struct Viewer<E: Engine, N: ExternalNavigator> {
    engine: E,
    navigator: N,
    state: ViewerState,
    options: Observable<ViewerOptions>,
    options_pushed: Subscription,
    document_options: Option<DocumentOptionsHandle>,
}

impl<E: Engine, N: ExternalNavigator> Viewer<E, N> {
    /// Create the component and push the initial options into the engine
    pub fn new(mut engine: E, navigator: N, options: ViewerOptions) -> Self {
        engine.set_options(&options);
        let options = Observable::new(options);
        let options_pushed = options.subscribe();
        Self {
            engine,
            navigator,
            state: ViewerState::new(),
            options,
            options_pushed,
            document_options: None,
        }
    }

    /// The observable state store
    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    /// Handle to the UI-editable viewer options
    ///
    /// Writes through this handle reach the engine on the next `tick`.
    pub fn options(&self) -> Observable<ViewerOptions> {
        self.options.clone()
    }

    /// Options of the currently active document, if a load was requested
    pub fn document_options(&self) -> Option<DocumentOptionsHandle> {
        self.document_options.clone()
    }

    /// Drain all pending engine events through the event bridge
    pub fn pump_events(&mut self, now: Instant) {
        while let Some(event) = self.engine.poll_event() {
            self.handle_event(event, now);
        }
    }

    /// Apply one engine event
    pub fn handle_event(&mut self, event: EngineEvent, now: Instant) {
        match event {
            EngineEvent::Debug { message } => debug!(target: "engine", "{message}"),
            EngineEvent::Info { message } => info!(target: "engine", "{message}"),
            EngineEvent::Warn { message } => warn!(target: "engine", "{message}"),
            EngineEvent::Error { message } => error!(target: "engine", "{message}"),
            EngineEvent::ReadyStateChange => self.on_ready_state_change(now),
            EngineEvent::Loaded => self.on_loaded(),
            EngineEvent::Nav(payload) => self.on_nav(payload),
            EngineEvent::Hyperlink { href, internal } => self.on_hyperlink(&href, internal),
        }
    }

    /// Flush timing-based propagation: the status projection and any
    /// pending option change
    pub fn tick(&mut self, now: Instant) {
        self.state.flush(now);
        if let Some(options) = self.options.poll(&mut self.options_pushed) {
            debug!("viewer options changed, pushing snapshot to engine");
            self.engine.set_options(&options);
        }
    }

    /// Load the document described by `document_options`
    ///
    /// The status flips to Loading before any engine call. A populated
    /// `url` dispatches the plain-document path; otherwise a populated
    /// `epub_url` dispatches the EPUB path. The handle becomes the active
    /// document record, replacing the previous one outright.
    pub fn load_document(
        &mut self,
        document_options: DocumentOptionsHandle,
        viewer_options: Option<ViewerOptions>,
        now: Instant,
    ) {
        self.state.set_status(ReadyState::Loading, now);

        if let Some(fresh) = viewer_options {
            let mut current = self.options.get();
            current.copy_from(&fresh);
            self.options.set(current);
        }

        self.document_options = Some(Arc::clone(&document_options));

        let document = document_options.lock().unwrap().clone();
        let options = self.options.get();
        if let Some(url) = &document.url {
            debug!("loading document {url}");
            self.engine.load_document(url, &document, &options);
        } else if let Some(epub_url) = &document.epub_url {
            debug!("loading EPUB {epub_url}");
            self.engine.load_epub(epub_url, &document, &options);
        } else {
            warn!("load requested without a document or EPUB URL");
        }
    }

    pub fn navigate_to_previous(&mut self) {
        self.engine.navigate_to_page(NavigationTarget::Previous);
    }

    pub fn navigate_to_next(&mut self) {
        self.engine.navigate_to_page(NavigationTarget::Next);
    }

    pub fn navigate_to_left(&mut self) {
        self.engine.navigate_to_page(NavigationTarget::Left);
    }

    pub fn navigate_to_right(&mut self) {
        self.engine.navigate_to_page(NavigationTarget::Right);
    }

    pub fn navigate_to_first(&mut self) {
        self.engine.navigate_to_page(NavigationTarget::First);
    }

    pub fn navigate_to_last(&mut self) {
        self.engine.navigate_to_page(NavigationTarget::Last);
    }

    pub fn navigate_to_epage(&mut self, epage: f64) {
        self.engine.navigate_to_page(NavigationTarget::Epage(epage));
    }

    pub fn navigate_to_internal_url(&mut self, href: &str) {
        self.engine.navigate_to_internal_url(href);
    }

    /// Query the engine's current zoom factor
    pub fn query_zoom_factor(&self, mode: ZoomMode) -> f64 {
        self.engine.query_zoom_factor(mode)
    }

    /// See [`page_numbers::epage_to_page_number`]
    pub fn epage_to_page_number(&self, epage: Option<f64>) -> Option<f64> {
        page_numbers::epage_to_page_number(epage)
    }

    /// See [`page_numbers::epage_from_page_number`]
    pub fn epage_from_page_number(&self, page_number: Option<f64>) -> Option<f64> {
        page_numbers::epage_from_page_number(page_number)
    }

    fn on_ready_state_change(&mut self, now: Instant) {
        let ready_state = self.engine.ready_state();
        // Progression first: an observer reacting to the status change must
        // already see the progression that belongs to it.
        if matches!(
            ready_state,
            ReadyState::Interactive | ReadyState::Complete
        ) {
            self.state
                .set_page_progression(self.engine.current_page_progression());
        }
        self.state.set_status(ready_state, now);
    }

    fn on_loaded(&mut self) {
        if self.options.get().profile {
            self.engine.print_timings();
        }
    }

    fn on_nav(&mut self, payload: NavPayload) {
        let NavPayload {
            cfi,
            first,
            last,
            epage,
            epage_count,
        } = payload;

        if let Some(cfi) = cfi {
            if let Some(active) = &self.document_options {
                active.lock().unwrap().fragment = Some(cfi);
            }
        }
        if let Some(first) = first {
            self.state.set_first_page(first);
        }
        if let Some(last) = last {
            self.state.set_last_page(last);
        }
        if let Some(epage) = epage {
            self.state.set_epage(epage);
        }
        if let Some(epage_count) = epage_count {
            self.state.set_epage_count(epage_count);
        }
    }

    fn on_hyperlink(&mut self, href: &str, internal: bool) {
        if internal {
            self.navigate_to_internal_url(href);
        } else {
            self.navigator.navigate(href);
        }
    }
}
