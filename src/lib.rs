pub mod catalog;
pub mod common;
pub mod controller;
pub mod gui;
pub mod launcher;
pub mod logging;
pub mod search;
pub mod selection;
pub mod settings;
pub mod zoom;
