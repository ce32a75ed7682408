//! Update function for the bookings controller.
//!
//! Every message is turned into a `common::store::Event` and handed to the
//! store. The effects the store returns are executed here: HTTP calls run in
//! `spawn_local` and report back with `Msg::Resolved`, and scroll requests are
//! deferred to the next `rendered` call.

use common::store::{CreateOutcome, Effect, Event};
use log::debug;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::ApiError;

use super::messages::Msg;
use super::state::BookingsComponent;

pub fn update(component: &mut BookingsComponent, ctx: &Context<BookingsComponent>, msg: Msg) -> bool {
    let effects = component.store.handle(Event::from(msg));
    for effect in effects {
        run_effect(component, ctx, effect);
    }
    true
}

fn run_effect(component: &mut BookingsComponent, ctx: &Context<BookingsComponent>, effect: Effect) {
    let link = ctx.link().clone();
    match effect {
        Effect::FetchAll { ticket } => {
            let api = component.api.clone();
            spawn_local(async move {
                let result = api.fetch_all().await.map_err(|e| e.to_string());
                link.send_message(Msg::Resolved(Event::LoadFinished { ticket, result }));
            });
        }
        Effect::Search { ticket, request } => {
            let api = component.api.clone();
            spawn_local(async move {
                let result = api.search(&request).await.map_err(|e| e.to_string());
                link.send_message(Msg::Resolved(Event::SearchFinished { ticket, result }));
            });
        }
        Effect::Create(draft) => {
            let api = component.api.clone();
            spawn_local(async move {
                let outcome = match api.create(&draft).await {
                    Ok(()) => CreateOutcome::Created,
                    Err(ApiError::Status { status, message }) => {
                        debug!("create answered HTTP {}", status);
                        CreateOutcome::Rejected(message)
                    }
                    Err(other) => CreateOutcome::Failed(other.to_string()),
                };
                link.send_message(Msg::Resolved(Event::CreateFinished(outcome)));
            });
        }
        Effect::ScrollToBottom => component.scroll_pending = true,
    }
}
