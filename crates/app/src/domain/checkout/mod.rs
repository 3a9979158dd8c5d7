//! Checkout

pub mod flow;

pub use flow::{CheckoutError, CheckoutFlow, CheckoutState, NOTICE_TTL};
