use axum::{
    http::{HeaderMap, Uri},
    response::Response,
};

use crate::web::utils::streaming::{ContentResponder, SCHEME_PREFIX};

/// HTTP 请求处理器：scheme 请求桥接
///
/// The view layer addresses media as `atom://<path>`; its webview rewrites
/// that to `GET /atom/<path>` against this host. The handler restores the
/// scheme URL and hands it, headers included, to the responder. The raw
/// (still percent-encoded) URI path is used so decoding happens exactly
/// once, inside the responder.
pub async fn handler(uri: Uri, headers: HeaderMap) -> Response {
    let encoded = uri.path().strip_prefix("/atom/").unwrap_or(uri.path());
    let url = format!("{}{}", SCHEME_PREFIX, encoded);
    ContentResponder::respond(&url, &headers).await
}
