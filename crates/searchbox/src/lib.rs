//! Searchbox - debounced autocomplete over a remote search API
//!
//! A search widget that turns keystrokes into a rate-limited stream of
//! autocomplete requests, submits full searches, renders results and
//! captures thumbs-up/down feedback. Rendering goes through the
//! [`view::SearchView`] trait; the HTTP side goes through [`client::SearchApi`].

pub mod cli;
pub mod client;
pub mod config;
pub mod debounce;
pub mod error;
pub mod types;
pub mod view;
pub mod widget;

pub use client::{SearchApi, SearchClient};
pub use config::{ClientConfig, PipelineConfig};
pub use error::SearchError;
pub use widget::SearchBox;
