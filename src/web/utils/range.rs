/// Validated byte-range, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    pub start: u64,
    pub end: u64,
}

impl ByteRange {
    pub fn len(&self) -> u64 {
        self.end - self.start + 1
    }
}

/// Range requests the responder cannot serve. Both map to 416 at the
/// HTTP boundary; they are kept apart for log messages.
#[derive(Debug, PartialEq, Eq)]
pub enum RangeError {
    /// Header did not match `bytes=<start>-<end>?`.
    Malformed,
    /// Numerically valid but outside `[0, file_size - 1]` or inverted.
    Unsatisfiable,
}

/// 解析并校验 Range 请求头
///
/// Accepts the single-range form `bytes=<start>-<end>?` used by media
/// elements. The open-ended form resolves `end` to `file_size - 1`; an
/// explicit `end` past EOF is clamped to it. Rejects a missing or
/// non-numeric start, `start >= file_size`, and `end < start`.
pub fn parse_range(header: &str, file_size: u64) -> Result<ByteRange, RangeError> {
    let suffix = header.strip_prefix("bytes=").ok_or(RangeError::Malformed)?;
    let (start_str, end_str) = suffix.split_once('-').ok_or(RangeError::Malformed)?;

    let start: u64 = start_str.trim().parse().map_err(|_| RangeError::Malformed)?;

    let end = match end_str.trim() {
        "" => file_size.saturating_sub(1),
        value => {
            let end: u64 = value.parse().map_err(|_| RangeError::Malformed)?;
            end.min(file_size.saturating_sub(1))
        }
    };

    if start >= file_size || end < start {
        return Err(RangeError::Unsatisfiable);
    }

    Ok(ByteRange { start, end })
}
