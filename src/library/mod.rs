pub mod item;
pub mod scan;

pub use item::MediaItem;
pub use scan::{find_media_files, shuffle_in_place};

/// Extensions the view layer can render as a still image.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp"];

/// Extensions the view layer hands to a `<video>` element.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm", "mov", "avi", "mkv", "ogg"];

pub(crate) fn is_supported_extension(ext: &str) -> bool {
    IMAGE_EXTENSIONS.contains(&ext) || VIDEO_EXTENSIONS.contains(&ext)
}
