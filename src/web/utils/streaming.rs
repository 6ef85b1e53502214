use axum::{
    body::Body,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use std::io::SeekFrom;
use std::path::PathBuf;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncSeekExt};
use tokio_util::io::ReaderStream;

use crate::web::utils::errors::{BODY_NOT_FOUND, BODY_READ_FAILED};
use crate::web::utils::mime::content_type_for_path;
use crate::web::utils::range::{parse_range, ByteRange};

/// The custom scheme the view layer builds media URLs with.
pub const SCHEME_PREFIX: &str = "atom://";

const STREAM_CHUNK_SIZE: usize = 64 * 1024;

/// 本地内容响应器
///
/// Resolves an `atom://` URL to an absolute filesystem path and builds an
/// HTTP-style response for it: the full file (200) or, when the request
/// carries a `Range` header, a positioned slice (206). Read-only and
/// stateless; every filesystem fault is converted to a status code here,
/// nothing propagates past this boundary.
pub struct ContentResponder;

impl ContentResponder {
    /// 主入口：处理一次 scheme 请求
    pub async fn respond(url: &str, headers: &HeaderMap) -> Response {
        let Some(path) = Self::decode_path(url) else {
            tracing::warn!("[responder] unrecognized scheme url: {}", url);
            return (StatusCode::NOT_FOUND, BODY_NOT_FOUND).into_response();
        };
        Self::serve_file(path, headers).await
    }

    /// Percent-decode the path segment of an `atom://` URL.
    ///
    /// No normalization beyond decoding: the view layer only ever builds
    /// these URLs from paths the host handed it, so the identifier is an
    /// absolute path verbatim (platform separators preserved).
    fn decode_path(url: &str) -> Option<PathBuf> {
        let encoded = url.strip_prefix(SCHEME_PREFIX)?;
        let decoded = urlencoding::decode(encoded).ok()?;
        Some(PathBuf::from(decoded.into_owned()))
    }

    async fn serve_file(path: PathBuf, headers: &HeaderMap) -> Response {
        // Stat failures of any kind read as "not there" to the view layer.
        let metadata = match tokio::fs::metadata(&path).await {
            Ok(m) if m.is_file() => m,
            Ok(_) => {
                tracing::warn!("[responder] not a regular file: {:?}", path);
                return (StatusCode::NOT_FOUND, BODY_NOT_FOUND).into_response();
            }
            Err(e) => {
                tracing::debug!("[responder] stat failed for {:?}: {}", path, e);
                return (StatusCode::NOT_FOUND, BODY_NOT_FOUND).into_response();
            }
        };
        let file_size = metadata.len();
        let content_type = content_type_for_path(&path);

        let range_header = headers.get(header::RANGE).and_then(|v| v.to_str().ok());
        match range_header {
            Some(raw) => match parse_range(raw, file_size) {
                Ok(range) => Self::partial_response(path, range, file_size, content_type).await,
                Err(err) => {
                    tracing::warn!(
                        "[responder] rejected range {:?} for {:?} (size {}): {:?}",
                        raw,
                        path,
                        file_size,
                        err
                    );
                    (
                        StatusCode::RANGE_NOT_SATISFIABLE,
                        [(header::CONTENT_RANGE, format!("bytes */{}", file_size))],
                    )
                        .into_response()
                }
            },
            None => Self::full_response(path, file_size, content_type).await,
        }
    }

    /// 无 Range：整文件响应（200）
    async fn full_response(path: PathBuf, file_size: u64, content_type: String) -> Response {
        let file = match File::open(&path).await {
            Ok(f) => f,
            Err(e) => return Self::open_error(&path, e),
        };
        let stream = ReaderStream::with_capacity(file, STREAM_CHUNK_SIZE);

        Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, content_type)
            .header(header::CONTENT_LENGTH, file_size.to_string())
            .header(header::ACCEPT_RANGES, "bytes")
            .body(Body::from_stream(stream))
            .unwrap()
    }

    /// 有 Range：定位读取切片响应（206）
    ///
    /// Opens, seeks to `start`, and streams exactly the requested span.
    /// The handle lives inside the response stream and is dropped when the
    /// body finishes or the client disconnects.
    async fn partial_response(
        path: PathBuf,
        range: ByteRange,
        file_size: u64,
        content_type: String,
    ) -> Response {
        let mut file = match File::open(&path).await {
            Ok(f) => f,
            Err(e) => return Self::open_error(&path, e),
        };
        if let Err(e) = file.seek(SeekFrom::Start(range.start)).await {
            tracing::error!("[responder] seek failed for {:?}: {}", path, e);
            return (StatusCode::INTERNAL_SERVER_ERROR, BODY_READ_FAILED).into_response();
        }

        let content_length = range.len();
        let stream = ReaderStream::with_capacity(file.take(content_length), STREAM_CHUNK_SIZE);

        Response::builder()
            .status(StatusCode::PARTIAL_CONTENT)
            .header(header::CONTENT_TYPE, content_type)
            .header(header::CONTENT_LENGTH, content_length.to_string())
            .header(header::ACCEPT_RANGES, "bytes")
            .header(
                header::CONTENT_RANGE,
                format!("bytes {}-{}/{}", range.start, range.end, file_size),
            )
            .body(Body::from_stream(stream))
            .unwrap()
    }

    /// The file can vanish between stat and open; that window is still 404.
    /// Anything else at open time is a transient I/O fault.
    fn open_error(path: &PathBuf, e: std::io::Error) -> Response {
        if e.kind() == std::io::ErrorKind::NotFound {
            tracing::debug!("[responder] file vanished before open: {:?}", path);
            (StatusCode::NOT_FOUND, BODY_NOT_FOUND).into_response()
        } else {
            tracing::error!("[responder] open failed for {:?}: {}", path, e);
            (StatusCode::INTERNAL_SERVER_ERROR, BODY_READ_FAILED).into_response()
        }
    }
}
