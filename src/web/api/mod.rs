pub mod library;
pub mod media;
pub mod shell;
pub mod windows;
