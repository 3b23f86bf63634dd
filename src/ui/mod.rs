pub mod app;
pub mod events;
pub mod input;
pub mod runtime;
pub mod sort;

mod footer;
mod grid;
mod header;
mod layout;
mod modal;
mod render;
mod terminal_guard;
mod theme;
