use yew::{html, Component, Context, Html};

pub struct LoadingComponent;

impl Component for LoadingComponent {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        LoadingComponent
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="right-container loading" aria-busy="true">
                <span class="spinner"></span>
                <p>{"Loading bookings..."}</p>
            </div>
        }
    }
}
