//! In-memory representation of a Qt Linguist translation catalog.
//!
//! A [`Catalog`] is built once from a `.ts` resource and is immutable
//! afterwards, so concurrent readers need no locking. Lookup is keyed by
//! `(context, source)`; callers that want the usual UI fallback behavior
//! (show the source text when no finished translation exists) go through
//! [`Catalog::translate`].

use std::collections::HashMap;
use std::fmt;

/// A `filename`/`line` pair from a `<location>` tag.
///
/// Messages can carry several locations. Only the first one matters for
/// the runtime table; the rest are provenance metadata for translation
/// tooling and are preserved for round-trip serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub filename: String,
    pub line: u32,
}

impl Location {
    pub fn new(filename: impl Into<String>, line: u32) -> Self {
        Self {
            filename: filename.into(),
            line,
        }
    }
}

/// Translation state, from the `type` attribute of `<translation>`.
///
/// An absent attribute means the translation is finished. The other
/// values come from Qt's translation tooling: `unfinished` entries have
/// not been reviewed, `vanished` and `obsolete` entries no longer have a
/// matching source string in the code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TranslationStatus {
    #[default]
    Finished,
    Unfinished,
    Vanished,
    Obsolete,
}

impl TranslationStatus {
    /// The `type` attribute value to serialize, `None` for finished.
    pub fn type_attr(self) -> Option<&'static str> {
        match self {
            TranslationStatus::Finished => None,
            TranslationStatus::Unfinished => Some("unfinished"),
            TranslationStatus::Vanished => Some("vanished"),
            TranslationStatus::Obsolete => Some("obsolete"),
        }
    }
}

impl fmt::Display for TranslationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslationStatus::Finished => write!(f, "finished"),
            TranslationStatus::Unfinished => write!(f, "unfinished"),
            TranslationStatus::Vanished => write!(f, "vanished"),
            TranslationStatus::Obsolete => write!(f, "obsolete"),
        }
    }
}

/// One `<message>` entry: a source string and its translation.
///
/// `source` and `translation` are stored byte-for-byte as recorded in the
/// resource, including embedded and trailing newlines and `&`-mnemonic
/// markers. Equality ignores `ts_line`, which is positional metadata
/// about the file the message was parsed from.
#[derive(Debug, Clone)]
pub struct Message {
    pub locations: Vec<Location>,
    pub source: String,
    pub translation: String,
    pub status: TranslationStatus,
    /// Line in the `.ts` file where this `<message>` starts (1-based).
    /// Zero for messages not created by the parser.
    pub ts_line: u32,
}

impl Message {
    pub fn is_finished(&self) -> bool {
        self.status == TranslationStatus::Finished
    }

    /// The location the runtime table cares about (the first one).
    pub fn primary_location(&self) -> Option<&Location> {
        self.locations.first()
    }
}

impl PartialEq for Message {
    fn eq(&self, other: &Self) -> bool {
        self.locations == other.locations
            && self.source == other.source
            && self.translation == other.translation
            && self.status == other.status
    }
}

impl Eq for Message {}

/// A named grouping of messages, typically one UI command or dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    pub name: String,
    pub messages: Vec<Message>,
}

impl Context {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            messages: Vec::new(),
        }
    }

    /// First message with the given source text.
    ///
    /// The format does not enforce uniqueness within a context; when
    /// duplicates exist the first entry wins, matching lookup order.
    pub fn get(&self, source: &str) -> Option<&Message> {
        self.messages.iter().find(|m| m.source == source)
    }

    pub fn status_counts(&self) -> StatusCounts {
        let mut counts = StatusCounts::default();
        for message in &self.messages {
            counts.record(message.status);
        }
        counts
    }
}

/// Per-status entry counts, used for completion reporting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub finished: usize,
    pub unfinished: usize,
    pub vanished: usize,
    pub obsolete: usize,
}

impl StatusCounts {
    pub fn record(&mut self, status: TranslationStatus) {
        match status {
            TranslationStatus::Finished => self.finished += 1,
            TranslationStatus::Unfinished => self.unfinished += 1,
            TranslationStatus::Vanished => self.vanished += 1,
            TranslationStatus::Obsolete => self.obsolete += 1,
        }
    }

    pub fn merge(&mut self, other: StatusCounts) {
        self.finished += other.finished;
        self.unfinished += other.unfinished;
        self.vanished += other.vanished;
        self.obsolete += other.obsolete;
    }

    pub fn total(&self) -> usize {
        self.finished + self.unfinished + self.vanished + self.obsolete
    }

    /// Completion percentage over displayable entries.
    ///
    /// Vanished and obsolete entries have no matching source string in
    /// the code anymore, so they are excluded from the denominator.
    pub fn percent_finished(&self) -> f64 {
        let active = self.finished + self.unfinished;
        if active == 0 {
            100.0
        } else {
            self.finished as f64 * 100.0 / active as f64
        }
    }
}

/// An immutable translation table loaded from a single `.ts` resource.
#[derive(Debug, Clone)]
pub struct Catalog {
    version: String,
    language: Option<String>,
    source_language: Option<String>,
    contexts: Vec<Context>,
    /// `(context, source)` -> indices into `contexts`. First entry wins
    /// for duplicate keys.
    index: HashMap<(String, String), (usize, usize)>,
}

impl Catalog {
    pub fn new(
        version: impl Into<String>,
        language: Option<String>,
        source_language: Option<String>,
        contexts: Vec<Context>,
    ) -> Self {
        let mut index = HashMap::new();
        for (ci, context) in contexts.iter().enumerate() {
            for (mi, message) in context.messages.iter().enumerate() {
                index
                    .entry((context.name.clone(), message.source.clone()))
                    .or_insert((ci, mi));
            }
        }
        Self {
            version: version.into(),
            language,
            source_language,
            contexts,
            index,
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn source_language(&self) -> Option<&str> {
        self.source_language.as_deref()
    }

    pub fn contexts(&self) -> &[Context] {
        &self.contexts
    }

    pub fn context(&self, name: &str) -> Option<&Context> {
        self.contexts.iter().find(|c| c.name == name)
    }

    /// Full message entry for a `(context, source)` key, any status.
    pub fn get(&self, context: &str, source: &str) -> Option<&Message> {
        let &(ci, mi) = self.index.get(&(context.to_string(), source.to_string()))?;
        Some(&self.contexts[ci].messages[mi])
    }

    /// The recorded translation, if present and finished.
    ///
    /// Unfinished, vanished and obsolete entries behave like missing
    /// keys for display purposes; they stay queryable via [`Self::get`]
    /// so tooling can still count and inspect them.
    pub fn lookup(&self, context: &str, source: &str) -> Option<&str> {
        self.get(context, source)
            .filter(|m| m.is_finished())
            .map(|m| m.translation.as_str())
    }

    /// Lookup with the display fallback folded in: the source text is
    /// returned verbatim when no finished translation exists. Never an
    /// error, never logged.
    pub fn translate<'a>(&'a self, context: &str, source: &'a str) -> &'a str {
        self.lookup(context, source).unwrap_or(source)
    }

    pub fn message_count(&self) -> usize {
        self.contexts.iter().map(|c| c.messages.len()).sum()
    }

    pub fn status_counts(&self) -> StatusCounts {
        let mut counts = StatusCounts::default();
        for context in &self.contexts {
            counts.merge(context.status_counts());
        }
        counts
    }
}

impl PartialEq for Catalog {
    fn eq(&self, other: &Self) -> bool {
        // The index is derived data; header and contexts carry the state.
        self.version == other.version
            && self.language == other.language
            && self.source_language == other.source_language
            && self.contexts == other.contexts
    }
}

impl Eq for Catalog {}
