use std::path::Path;

/// Content type for a filesystem path, derived from the extension.
///
/// The fixed table covers every format the view layer renders; anything
/// else falls through to `mime_guess`, then to `application/octet-stream`.
/// Extension matching is case-insensitive (`.JPG` serves as `image/jpeg`).
pub fn content_type_for_path(path: &Path) -> String {
    let ext = path
        .extension()
        .and_then(|value| value.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let known = match ext.as_str() {
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        "mov" => "video/quicktime",
        "avi" => "video/x-msvideo",
        "mkv" => "video/x-matroska",
        "ogg" => "video/ogg",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        _ => "",
    };
    if !known.is_empty() {
        return known.to_string();
    }

    mime_guess::from_ext(&ext)
        .first_raw()
        .unwrap_or("application/octet-stream")
        .to_string()
}
