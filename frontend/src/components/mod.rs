pub mod booking_form;
pub mod booking_list;
pub mod bookings;
pub mod loading;
pub mod search;
