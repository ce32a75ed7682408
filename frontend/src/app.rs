use crate::components::bookings::BookingsComponent;
use crate::config;
use yew::{html, AttrValue, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct AppProps {
    #[prop_or_else(default_api_base)]
    pub api_base: AttrValue,
}

fn default_api_base() -> AttrValue {
    AttrValue::Static(config::api_url())
}

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = AppProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <BookingsComponent api_base={ctx.props().api_base.clone()} />
        }
    }
}
