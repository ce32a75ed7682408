//! Layout: search panel and creation form on the left, the list area on the
//! right. The list area shows exactly one of the loading indicator, the load
//! error, or the booking table.

use common::model::booking::BookingField;
use common::model::search::SearchField;
use yew::html::Scope;
use yew::prelude::*;

use crate::components::booking_form::{today, BookingFormComponent};
use crate::components::booking_list::BookingListComponent;
use crate::components::loading::LoadingComponent;
use crate::components::search::SearchPanelComponent;

use super::messages::Msg;
use super::state::BookingsComponent;

pub fn view(component: &BookingsComponent, ctx: &Context<BookingsComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="App">
            <div class="left-container">
                <SearchPanelComponent
                    query={component.store.query().clone()}
                    on_change={link.callback(|(field, value): (SearchField, String)| Msg::SearchChanged(field, value))}
                />
                { build_form(component, link) }
            </div>
            { build_list_area(component) }
        </div>
    }
}

fn build_form(component: &BookingsComponent, link: &Scope<BookingsComponent>) -> Html {
    let error = component.store.form_error().map(|m| AttrValue::from(m.to_string()));

    html! {
        <BookingFormComponent
            draft={component.store.draft().clone()}
            {error}
            min_date={today()}
            on_change={link.callback(|(field, value): (BookingField, String)| Msg::DraftChanged(field, value))}
            on_submit={link.callback(|_: ()| Msg::BookingSubmitted)}
            on_clear={link.callback(|_: ()| Msg::DraftCleared)}
        />
    }
}

fn build_list_area(component: &BookingsComponent) -> Html {
    let view = component.store.view();

    if view.is_loading {
        html! { <LoadingComponent /> }
    } else if let Some(message) = &view.error {
        html! { <div class="right-container load-error">{ message.clone() }</div> }
    } else {
        html! {
            <BookingListComponent
                bookings={component.store.filtered().to_vec()}
                end_ref={component.end_ref.clone()}
            />
        }
    }
}
