//! Bookings controller: root module wiring the Yew `Component` implementation
//! with submodules for messages, props, state, update logic and view.
//!
//! Responsibilities
//! - Own the `BookingStore` and be the only place it is mutated.
//! - On first render, send `Msg::Mounted`, which loads the full listing and
//!   issues the warm-up search.
//! - After each render, run a pending scroll-to-bottom so the scroll always
//!   sees the committed list.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::BookingsProps;
pub use state::BookingsComponent;

use crate::api::ApiClient;

impl Component for BookingsComponent {
    type Message = Msg;
    type Properties = BookingsProps;

    fn create(ctx: &Context<Self>) -> Self {
        BookingsComponent::new(ApiClient::new(&ctx.props().api_base))
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            ctx.link().send_message(Msg::Mounted);
        }
        if self.scroll_pending {
            self.scroll_pending = false;
            self.scroll_to_bottom();
        }
    }
}
