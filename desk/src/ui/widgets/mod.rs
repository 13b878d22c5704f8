//! # Reusable UI Widgets

pub mod files;
pub mod forms;
pub mod line_items;
pub mod nav;
pub mod notifications;
pub mod tables;
