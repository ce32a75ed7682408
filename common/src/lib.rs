//! Types and state shared by the bookings front end.
//!
//! - `model`: the wire shapes exchanged with the bookings API.
//! - `requests`: query construction and error payload rendering.
//! - `store`: the framework-free booking store driven by the Yew controller.

pub mod model;
pub mod requests;
pub mod store;
