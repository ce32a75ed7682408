use common::model::booking::BookingField;
use common::model::search::SearchField;
use common::store::Event;

/// Messages handled by `BookingsComponent`.
///
/// User intents come from the child components' callbacks; `Resolved`
/// carries the outcome of a request back into the store.
pub enum Msg {
    Mounted,
    SearchChanged(SearchField, String),
    DraftChanged(BookingField, String),
    BookingSubmitted,
    DraftCleared,
    Resolved(Event),
}

impl From<Msg> for Event {
    fn from(msg: Msg) -> Self {
        match msg {
            Msg::Mounted => Event::Mounted,
            Msg::SearchChanged(field, value) => Event::SearchChanged { field, value },
            Msg::DraftChanged(field, value) => Event::DraftChanged { field, value },
            Msg::BookingSubmitted => Event::BookingSubmitted,
            Msg::DraftCleared => Event::DraftCleared,
            Msg::Resolved(event) => event,
        }
    }
}
