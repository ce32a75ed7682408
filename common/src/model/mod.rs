pub mod booking;
pub mod search;
