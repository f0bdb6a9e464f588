//! Observable viewer state store
//!
//! Holds the readiness status and page progression as the two authoritative
//! reactive primitives, plus the four navigation facts reported by the
//! engine. Consumers get read-only views; all mutation funnels through the
//! crate-internal setters used by the event bridge.

use std::time::{Duration, Instant};

use pageturn_engine::{PageProgression, ReadyState};
use pageturn_reactive::{Debounced, Observable, ReadOnlyObservable};

/// Quiet window applied to the externally observed status projection
///
/// Rapid status writes during a fast engine transition collapse into one
/// notification carrying the final value.
pub const STATUS_NOTIFY_WINDOW: Duration = Duration::from_millis(100);

/// Externally observable viewer state
pub struct ViewerState {
    /// Synchronous status value, updated immediately on every write
    raw_status: Observable<ReadyState>,

    /// Coalesced projection of `raw_status` exposed to consumers
    status_view: Observable<ReadyState>,
    status_window: Debounced<ReadyState>,

    page_progression: Observable<PageProgression>,

    epage: Observable<Option<f64>>,
    epage_count: Observable<Option<f64>>,
    first_page: Observable<Option<bool>>,
    last_page: Observable<Option<bool>>,
}

impl ViewerState {
    pub fn new() -> Self {
        Self {
            raw_status: Observable::new(ReadyState::Loading),
            status_view: Observable::new(ReadyState::Loading),
            // notify-always: a reload that settles on the value already
            // shown still produces a notification after quiescence.
            status_window: Debounced::new(STATUS_NOTIFY_WINDOW).notify_always(),
            page_progression: Observable::new(PageProgression::default()),
            epage: Observable::new(None),
            epage_count: Observable::new(None),
            first_page: Observable::new(None),
            last_page: Observable::new(None),
        }
    }

    /// Coalesced status projection
    ///
    /// Subscribers see at most one notification per quiet window, always
    /// carrying the final value once writes stop.
    pub fn status(&self) -> ReadOnlyObservable<ReadyState> {
        self.status_view.read_only()
    }

    /// The synchronous status value, with no notification delay
    pub fn raw_status(&self) -> ReadyState {
        self.raw_status.get()
    }

    /// Whether the document can be navigated
    ///
    /// Derived from the raw status on every call, so it can never lag
    /// behind a status write.
    pub fn navigatable(&self) -> bool {
        self.raw_status.get() != ReadyState::Loading
    }

    /// Page progression of the loaded document
    ///
    /// Only trustworthy once `navigatable` is true.
    pub fn page_progression(&self) -> ReadOnlyObservable<PageProgression> {
        self.page_progression.read_only()
    }

    /// Current engine-native page coordinate, absent until first reported
    pub fn epage(&self) -> ReadOnlyObservable<Option<f64>> {
        self.epage.read_only()
    }

    /// Total page count in engine-native coordinates
    pub fn epage_count(&self) -> ReadOnlyObservable<Option<f64>> {
        self.epage_count.read_only()
    }

    /// Whether the view is at the first page
    pub fn first_page(&self) -> ReadOnlyObservable<Option<bool>> {
        self.first_page.read_only()
    }

    /// Whether the view is at the last page
    pub fn last_page(&self) -> ReadOnlyObservable<Option<bool>> {
        self.last_page.read_only()
    }

    pub(crate) fn set_status(&mut self, status: ReadyState, now: Instant) {
        self.raw_status.set(status);
        self.status_window.write(status, now);
    }

    pub(crate) fn set_page_progression(&self, progression: PageProgression) {
        self.page_progression.set(progression);
    }

    pub(crate) fn set_epage(&self, epage: f64) {
        self.epage.set(Some(epage));
    }

    pub(crate) fn set_epage_count(&self, epage_count: f64) {
        self.epage_count.set(Some(epage_count));
    }

    pub(crate) fn set_first_page(&self, first: bool) {
        self.first_page.set(Some(first));
    }

    pub(crate) fn set_last_page(&self, last: bool) {
        self.last_page.set(Some(last));
    }

    /// Release a due status notification into the projection
    pub(crate) fn flush(&mut self, now: Instant) {
        if let Some(status) = self.status_window.poll(now) {
            self.status_view.set_always(status);
        }
    }
}

impl Default for ViewerState {
    fn default() -> Self {
        Self::new()
    }
}
