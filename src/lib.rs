pub mod app;
pub mod config;
pub mod course;
pub mod data;
pub mod error;
pub mod fetch;
pub mod lesson;
pub mod model;
pub mod quiz;
pub mod ui;
pub mod view_models;

#[cfg(test)]
mod fixtures;

pub use app::{Route, ViewerApp};
pub use config::ViewerConfig;
pub use error::{Result, ViewerError};
