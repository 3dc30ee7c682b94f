//! Terminal front end for the search widget

pub mod commands;
pub mod display;
pub mod interactive;
