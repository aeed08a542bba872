//! HTTP fetch layer
//!
//! A thin GET-only client over reqwest. One outstanding request at a time,
//! no retries, no rate limiting; transport and status failures surface as
//! distinguishable errors and the caller decides what to do with them.

mod client;

pub use client::HttpClient;
