//! Waypoint: a terminal dashboard for browsing saved map locations.
//!
//! The [`store`] holds locations, categories and the active category filter;
//! [`nav`] derives the sidebar entries and badge counts from a store snapshot.
//! [`app`], [`modules`] and [`ui`] wire both into a ratatui shell.

pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod modules;
pub mod nav;
pub mod store;
pub mod ui;
