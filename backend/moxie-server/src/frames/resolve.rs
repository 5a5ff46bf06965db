//! Identifier resolution for the frame handler.

use moxie_core::FrameState;

/// Pick the FID to display.
///
/// # Resolution order (first non-empty wins)
/// 1. Requester FID from the signed message
/// 2. `userfid` query parameter of the request URL
/// 3. `lastFid` carried in the frame state
pub fn resolve_fid(
    message_fid: Option<&str>,
    url_fid: Option<&str>,
    state: &FrameState,
) -> Option<String> {
    [message_fid, url_fid, state.fid()]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|fid| !fid.is_empty())
        .map(String::from)
}
