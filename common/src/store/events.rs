use crate::model::booking::{Booking, BookingDraft, BookingField};
use crate::model::search::SearchField;
use crate::requests::SearchRequest;

/// Sequence number of a request that may overwrite the filtered view.
pub type Ticket = u64;

/// Everything that can happen to the store: user intents emitted by the
/// child components, and the outcome of requests the store asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The controller was mounted. Only the first one has an effect.
    Mounted,
    /// Reload the canonical list without showing the loading indicator.
    Refresh,
    LoadFinished {
        ticket: Ticket,
        result: Result<Vec<Booking>, String>,
    },
    SearchChanged {
        field: SearchField,
        value: String,
    },
    SearchFinished {
        ticket: Ticket,
        result: Result<Vec<Booking>, String>,
    },
    DraftChanged {
        field: BookingField,
        value: String,
    },
    BookingSubmitted,
    CreateFinished(CreateOutcome),
    DraftCleared,
}

/// Result of `POST /bookings`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    Created,
    /// The server answered with a non-success status; carries the rendered body.
    Rejected(String),
    /// The request never got an answer.
    Failed(String),
}

/// Work the store needs the host to perform. Outcomes come back as [`Event`]s.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    FetchAll { ticket: Ticket },
    Search { ticket: Ticket, request: SearchRequest },
    Create(BookingDraft),
    /// Run once the committed state has been rendered.
    ScrollToBottom,
}
