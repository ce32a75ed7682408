//! Search panel: a free-text term input and a date input.
//!
//! The panel keeps no state of its own. Every input event is forwarded to the
//! controller as `(SearchField, value)`; the controller decides whether to
//! query the server or restore the full list.

use common::model::search::{SearchField, SearchQuery};
use log::warn;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SearchPanelProps {
    pub query: SearchQuery,
    pub on_change: Callback<(SearchField, String)>,
}

pub struct SearchPanelComponent;

impl Component for SearchPanelComponent {
    type Message = ();
    type Properties = SearchPanelProps;

    fn create(_ctx: &Context<Self>) -> Self {
        SearchPanelComponent
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let oninput = field_input_callback(props.on_change.clone());

        html! {
            <div class="search-container">
                <h2>{"Search"}</h2>
                <input
                    type="text"
                    name={SearchField::Term.name()}
                    placeholder="Search firstName/surname/email"
                    aria-label="search term input"
                    value={props.query.term.clone()}
                    oninput={oninput.clone()}
                />
                <input
                    type="date"
                    name={SearchField::Date.name()}
                    aria-label="search date input"
                    value={props.query.date.clone()}
                    {oninput}
                />
            </div>
        }
    }
}

/// Reads the input's `name` to find out which filter changed.
fn field_input_callback(on_change: Callback<(SearchField, String)>) -> Callback<InputEvent> {
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        match input.name().parse::<SearchField>() {
            Ok(field) => on_change.emit((field, input.value())),
            Err(err) => warn!("ignoring search input: {}", err),
        }
    })
}
