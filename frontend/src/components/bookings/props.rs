use yew::prelude::*;

/// Properties for the `BookingsComponent`.
#[derive(Properties, PartialEq, Clone)]
pub struct BookingsProps {
    /// Base resource of the bookings API, e.g. `https://host/bookings`.
    ///
    /// Read once when the component is created.
    pub api_base: AttrValue,
}
