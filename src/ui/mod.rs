//! Stateless view pieces driven by the search controller

pub mod gallery;
pub mod modal;
pub mod notice;
pub mod search_bar;
pub mod suggestions;
pub mod theme;
