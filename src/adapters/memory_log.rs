use std::sync::Mutex;

use serde_json::Value;

use crate::error::ExtractError;
use crate::ports::diagnostics::ExtractionLog;

/// An extraction event as captured by [`MemoryLog`].
#[derive(Debug, Clone, PartialEq)]
pub enum LogEvent {
    SectionFound {
        listing_id: String,
        section: String,
    },
    DuplicateSections {
        listing_id: String,
        section: String,
        count: usize,
    },
    SectionMissing {
        error: ExtractError,
    },
    Malformed {
        error: ExtractError,
        context: Value,
    },
    ItemSkipped {
        listing_id: String,
        section: String,
        reason: String,
    },
    PresentationMissing {
        listing_id: String,
    },
    Extracted {
        listing_id: String,
        concern: String,
        field_count: usize,
    },
}

/// Keeps extraction events in memory, for callers that want to report
/// diagnostics per listing rather than stream them.
#[derive(Debug, Default)]
pub struct MemoryLog {
    events: Mutex<Vec<LogEvent>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<LogEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    fn push(&self, event: LogEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        } else {
            tracing::error!("Memory log lock poisoned, dropping event");
        }
    }
}

impl ExtractionLog for MemoryLog {
    fn section_found(&self, listing_id: &str, section: &str) {
        self.push(LogEvent::SectionFound {
            listing_id: listing_id.into(),
            section: section.into(),
        });
    }

    fn duplicate_sections(&self, listing_id: &str, section: &str, count: usize) {
        self.push(LogEvent::DuplicateSections {
            listing_id: listing_id.into(),
            section: section.into(),
            count,
        });
    }

    fn section_missing(&self, error: &ExtractError, _context: &Value) {
        self.push(LogEvent::SectionMissing {
            error: error.clone(),
        });
    }

    fn malformed(&self, error: &ExtractError, context: &Value) {
        self.push(LogEvent::Malformed {
            error: error.clone(),
            context: context.clone(),
        });
    }

    fn item_skipped(&self, listing_id: &str, section: &str, reason: &str, _context: &Value) {
        self.push(LogEvent::ItemSkipped {
            listing_id: listing_id.into(),
            section: section.into(),
            reason: reason.into(),
        });
    }

    fn presentation_missing(&self, error: &ExtractError, _document: &Value) {
        self.push(LogEvent::PresentationMissing {
            listing_id: error.listing_id().into(),
        });
    }

    fn extracted(&self, listing_id: &str, concern: &str, field_count: usize) {
        self.push(LogEvent::Extracted {
            listing_id: listing_id.into(),
            concern: concern.into(),
            field_count,
        });
    }
}
