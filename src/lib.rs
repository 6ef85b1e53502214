pub mod config;
pub mod library;
pub mod shell;
pub mod web;
pub mod windows;
