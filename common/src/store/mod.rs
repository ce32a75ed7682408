//! Booking store: the single owner of the booking list state.
//!
//! The store follows an Elm-style contract. [`BookingStore::handle`] receives
//! an [`Event`], performs the state transition, and returns the [`Effect`]s the
//! host (the Yew controller) must run. Nothing here touches the network or the
//! DOM, so every transition is testable on the native target.
//!
//! Ordering
//! - Load-all and search requests carry a [`Ticket`]. A search response only
//!   replaces the filtered view when its ticket is newer than the one that
//!   produced the current view, so a slow response can never overwrite a newer
//!   result.
//! - The filtered view is either a mirror of the canonical list or a search
//!   result. Clearing the search and committing a load switch it back to
//!   mirroring; while mirroring, every committed load is copied into it
//!   whatever its ticket.
//! - The warm-up search issued at mount only fills the view until the first
//!   load commits. After that the load outranks it.
//! - A load-all response always updates the canonical list and view state.

mod events;


use log::{debug, error, warn};

use crate::model::booking::{Booking, BookingDraft};
use crate::model::search::SearchQuery;
use crate::requests::SearchRequest;

pub use events::{CreateOutcome, Effect, Event, Ticket};

/// Loading and error flags for the list area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// True only until the load issued at mount resolves.
    pub is_loading: bool,
    /// Message of the last failed load, cleared by the next successful one.
    pub error: Option<String>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            is_loading: true,
            error: None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct BookingStore {
    bookings: Vec<Booking>,
    filtered: Vec<Booking>,
    view: ViewState,
    query: SearchQuery,
    draft: BookingDraft,
    form_error: Option<String>,
    mounted: bool,
    /// A load has committed at least once.
    loaded: bool,
    /// The filtered view holds a search result rather than the canonical list.
    showing_search: bool,
    warm_up: Option<Ticket>,
    last_issued: Ticket,
    last_applied: Ticket,
}

impl BookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Canonical list, as last fetched from `GET /bookings`.
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    /// What the list view displays.
    pub fn filtered(&self) -> &[Booking] {
        &self.filtered
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn form_error(&self) -> Option<&str> {
        self.form_error.as_deref()
    }

    pub fn handle(&mut self, event: Event) -> Vec<Effect> {
        match event {
            Event::Mounted => {
                if self.mounted {
                    return Vec::new();
                }
                self.mounted = true;
                self.view.is_loading = true;
                let load = self.next_ticket();
                let warm_up = self.next_ticket();
                self.warm_up = Some(warm_up);
                vec![
                    Effect::FetchAll { ticket: load },
                    Effect::Search {
                        ticket: warm_up,
                        request: SearchRequest::warm_up(),
                    },
                ]
            }
            Event::Refresh => vec![Effect::FetchAll {
                ticket: self.next_ticket(),
            }],
            Event::LoadFinished { ticket, result } => self.finish_load(ticket, result),
            Event::SearchChanged { field, value } => {
                if value.is_empty() {
                    self.query.clear();
                    self.last_applied = self.next_ticket();
                    self.showing_search = false;
                    self.filtered = self.bookings.clone();
                    return Vec::new();
                }
                self.query.set(field, value.clone());
                vec![Effect::Search {
                    ticket: self.next_ticket(),
                    request: SearchRequest::new(field, value),
                }]
            }
            Event::SearchFinished { ticket, result } => {
                let warm_up = self.warm_up == Some(ticket);
                if warm_up {
                    self.warm_up = None;
                }
                match result {
                    Ok(found) => self.finish_search(ticket, found, warm_up),
                    Err(message) => warn!("search request {} failed: {}", ticket, message),
                }
                Vec::new()
            }
            Event::DraftChanged { field, value } => {
                self.draft.set(field, value);
                Vec::new()
            }
            Event::BookingSubmitted => vec![Effect::Create(self.draft.clone())],
            Event::CreateFinished(outcome) => self.finish_create(outcome),
            Event::DraftCleared => {
                self.clear_draft();
                Vec::new()
            }
        }
    }

    fn finish_load(&mut self, ticket: Ticket, result: Result<Vec<Booking>, String>) -> Vec<Effect> {
        self.view.is_loading = false;
        match result {
            Ok(bookings) => {
                let resized = bookings.len() != self.bookings.len();
                self.view.error = None;
                self.loaded = true;
                self.bookings = bookings;
                self.mirror_load(ticket);
                if resized {
                    vec![Effect::ScrollToBottom]
                } else {
                    Vec::new()
                }
            }
            Err(message) => {
                error!("loading bookings failed: {}", message);
                self.view.error = Some(message);
                Vec::new()
            }
        }
    }

    fn finish_create(&mut self, outcome: CreateOutcome) -> Vec<Effect> {
        match outcome {
            CreateOutcome::Created => {
                self.clear_draft();
                vec![
                    Effect::FetchAll {
                        ticket: self.next_ticket(),
                    },
                    Effect::ScrollToBottom,
                ]
            }
            CreateOutcome::Rejected(message) => {
                debug!("booking rejected: {}", message);
                self.form_error = Some(message);
                Vec::new()
            }
            CreateOutcome::Failed(message) => {
                error!("creating booking failed: {}", message);
                self.form_error = Some(message);
                Vec::new()
            }
        }
    }

    /// Copies a freshly committed canonical list into the filtered view,
    /// unless a newer search result is on display.
    fn mirror_load(&mut self, ticket: Ticket) {
        if self.showing_search && ticket <= self.last_applied {
            debug!(
                "keeping search result {} over load {}",
                self.last_applied, ticket
            );
            return;
        }
        self.showing_search = false;
        self.last_applied = self.last_applied.max(ticket);
        self.filtered = self.bookings.clone();
    }

    fn finish_search(&mut self, ticket: Ticket, found: Vec<Booking>, warm_up: bool) {
        if warm_up && self.loaded {
            debug!("warm-up search {} arrived after the first load", ticket);
            return;
        }
        if ticket <= self.last_applied {
            debug!(
                "discarding search {} for filtered view, already showing {}",
                ticket, self.last_applied
            );
            return;
        }
        self.last_applied = ticket;
        self.showing_search = !warm_up;
        self.filtered = found;
    }

    fn clear_draft(&mut self) {
        self.draft = BookingDraft::default();
        self.form_error = None;
    }

    fn next_ticket(&mut self) -> Ticket {
        self.last_issued += 1;
        self.last_issued
    }
}
