//! Fuel & Mechanic Dispatch Library
//!
//! The order lifecycle of a mock on-demand fuel delivery storefront. The
//! whole engine runs headless; a front end only has to render a session and
//! forward user intents into it.

pub mod storefront;
