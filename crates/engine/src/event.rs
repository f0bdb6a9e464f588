//! Events produced by the engine
//!
//! One variant per event kind the engine emits. Payload fields mirror what
//! the engine reports; the synchronization layer applies them without
//! validation beyond presence checks.

/// Tagged union of engine events
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    /// Diagnostic text at debug level
    Debug { message: String },

    /// Diagnostic text at info level
    Info { message: String },

    /// Diagnostic text at warn level
    Warn { message: String },

    /// Diagnostic text at error level
    ///
    /// An error event is only a log line; the lifecycle state changes only
    /// if the engine also reports an Error ready state.
    Error { message: String },

    /// The engine's ready state changed; the new value is queried from the
    /// engine rather than carried in the payload
    ReadyStateChange,

    /// Document finished loading
    Loaded,

    /// Reading position or pagination facts changed
    Nav(NavPayload),

    /// A hyperlink was activated
    Hyperlink { href: String, internal: bool },
}

/// Sparse navigation facts carried by a `Nav` event
///
/// Every field is optional; an absent field leaves the previously reported
/// value untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavPayload {
    /// Content-fragment identifier of the new reading position
    pub cfi: Option<String>,

    /// Whether the view is at the first page
    pub first: Option<bool>,

    /// Whether the view is at the last page
    pub last: Option<bool>,

    /// Current engine-native page coordinate
    pub epage: Option<f64>,

    /// Total page count in engine-native coordinates
    pub epage_count: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_payload_defaults_to_all_absent() {
        let payload = NavPayload::default();
        assert_eq!(payload.cfi, None);
        assert_eq!(payload.first, None);
        assert_eq!(payload.last, None);
        assert_eq!(payload.epage, None);
        assert_eq!(payload.epage_count, None);
    }
}
