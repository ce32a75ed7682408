//! Table of the bookings currently in the filtered view.
//!
//! The trailing empty `div` bound to `end_ref` is the scroll target used after
//! the list grows or a booking is created.

use common::model::booking::Booking;
use yew::{html, Component, Context, Html, NodeRef, Properties};

#[derive(Properties, PartialEq)]
pub struct BookingListProps {
    pub bookings: Vec<Booking>,
    pub end_ref: NodeRef,
}

pub struct BookingListComponent;

impl Component for BookingListComponent {
    type Message = ();
    type Properties = BookingListProps;

    fn create(_ctx: &Context<Self>) -> Self {
        BookingListComponent
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();

        html! {
            <div class="right-container">
                <h2>{"Bookings"}</h2>
                {
                    if props.bookings.is_empty() {
                        html! { <p class="empty-list">{"No bookings found."}</p> }
                    } else {
                        html! {
                            <table class="bookings-table">
                                <thead>
                                    <tr>
                                        <th>{"Id"}</th>
                                        <th>{"Title"}</th>
                                        <th>{"First name"}</th>
                                        <th>{"Surname"}</th>
                                        <th>{"Email"}</th>
                                        <th>{"Room"}</th>
                                        <th>{"Check in"}</th>
                                        <th>{"Check out"}</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    { for props.bookings.iter().enumerate().map(|(i, b)| booking_row(i, b)) }
                                </tbody>
                            </table>
                        }
                    }
                }
                <div class="list-end" ref={props.end_ref.clone()}></div>
            </div>
        }
    }
}

fn booking_row(index: usize, booking: &Booking) -> Html {
    let id = booking
        .id
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_default();
    let key = booking.row_key(index);
    let room = booking
        .room_id
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_default();

    html! {
        <tr key={key}>
            <td>{ id }</td>
            <td>{ booking.title.clone() }</td>
            <td>{ booking.first_name.clone() }</td>
            <td>{ booking.surname.clone() }</td>
            <td>{ booking.email.clone() }</td>
            <td>{ room }</td>
            <td>{ booking.check_in_date.clone() }</td>
            <td>{ booking.check_out_date.clone() }</td>
        </tr>
    }
}
