//! Creation form for a new booking.
//!
//! Renders one input per `BookingField` from the controller-owned draft, and
//! emits intents for edits, submission and clearing. The server's error (if
//! any) is shown below the buttons.

use common::model::booking::{calendar_date, BookingDraft, BookingField};
use log::warn;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BookingFormProps {
    pub draft: BookingDraft,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    /// `YYYY-MM-DD`, used as the `min` of both date inputs.
    pub min_date: AttrValue,
    pub on_change: Callback<(BookingField, String)>,
    pub on_submit: Callback<()>,
    pub on_clear: Callback<()>,
}

pub struct BookingFormComponent;

impl Component for BookingFormComponent {
    type Message = ();
    type Properties = BookingFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        BookingFormComponent
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let oninput = field_input_callback(props.on_change.clone());

        let onsubmit = {
            let on_submit = props.on_submit.clone();
            Callback::from(move |e: SubmitEvent| {
                e.prevent_default();
                on_submit.emit(());
            })
        };
        let onclear = {
            let on_clear = props.on_clear.clone();
            Callback::from(move |_: MouseEvent| on_clear.emit(()))
        };

        html! {
            <form class="form-container" {onsubmit}>
                <h2>{"Create Bookings"}</h2>
                { for BookingField::ALL.iter().map(|field| field_input(*field, props, &oninput)) }
                <button type="submit">{"Submit"}</button>
                <button type="button" onclick={onclear}>{"Clear"}</button>
                {
                    match &props.error {
                        Some(message) => html! { <p class="form-error">{ message.clone() }</p> },
                        None => html! {},
                    }
                }
            </form>
        }
    }
}

fn field_input(field: BookingField, props: &BookingFormProps, oninput: &Callback<InputEvent>) -> Html {
    let value = props.draft.get(field).to_string();
    let (placeholder, label) = labels(field);

    if field.is_date() {
        html! {
            <input
                type="date"
                name={field.name()}
                aria-label={label}
                min={props.min_date.clone()}
                {value}
                oninput={oninput.clone()}
            />
        }
    } else {
        html! {
            <input
                type="text"
                name={field.name()}
                {placeholder}
                aria-label={label}
                {value}
                oninput={oninput.clone()}
            />
        }
    }
}

fn labels(field: BookingField) -> (&'static str, &'static str) {
    match field {
        BookingField::Title => ("title...", "title input"),
        BookingField::FirstName => ("first name...", "first name input"),
        BookingField::Surname => ("surname...", "surname input"),
        BookingField::Email => ("email...", "email input"),
        BookingField::RoomId => ("room id...", "room id input"),
        BookingField::CheckInDate => ("", "check in date input"),
        BookingField::CheckOutDate => ("", "check out date input"),
    }
}

fn field_input_callback(on_change: Callback<(BookingField, String)>) -> Callback<InputEvent> {
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        match input.name().parse::<BookingField>() {
            Ok(field) => on_change.emit((field, input.value())),
            Err(err) => warn!("ignoring form input: {}", err),
        }
    })
}

/// Today's local date as `YYYY-MM-DD`. Called on every render so a page left
/// open past midnight moves its `min` forward.
pub fn today() -> String {
    let now = js_sys::Date::new_0();
    calendar_date(now.get_full_year(), now.get_month(), now.get_date())
}
