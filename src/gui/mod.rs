//! Desktop settings panel for the section layout

mod components;
mod constants;
mod manager;

pub use manager::run_gui;
