//! Runtime state of the bookings controller.

use common::store::BookingStore;
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

use crate::api::ApiClient;

pub struct BookingsComponent {
    /// Owns every piece of booking state; see `common::store`.
    pub store: BookingStore,

    pub api: ApiClient,

    /// End-of-list anchor rendered by the booking list.
    pub end_ref: NodeRef,

    /// Set by a `ScrollToBottom` effect, consumed in `rendered` once the
    /// committed state is in the DOM.
    pub scroll_pending: bool,
}

impl BookingsComponent {
    pub fn new(api: ApiClient) -> Self {
        Self {
            store: BookingStore::new(),
            api,
            end_ref: NodeRef::default(),
            scroll_pending: false,
        }
    }

    /// Smoothly scrolls the end anchor into view. Does nothing while the list
    /// is not rendered (loading or error).
    pub fn scroll_to_bottom(&self) {
        if let Some(anchor) = self.end_ref.cast::<Element>() {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::End);
            anchor.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
}
