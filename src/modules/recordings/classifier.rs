use lazy_static::lazy_static;
use regex::Regex;

/// Classification flags for a submitted URL. A URL lands in at most one
/// primary category; `is_live_candidate` marks that a live flag may be
/// collected at all (YouTube only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UrlClass {
    pub is_youtube: bool,
    pub is_live_candidate: bool,
    pub is_twitter: bool,
}

lazy_static! {
    // Case-sensitive prefix patterns, checked in order; first match wins.
    static ref YOUTUBE_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"^(?:https?://)?(?:www\.)?youtube\.com/watch\?v=").unwrap(),
        Regex::new(r"^(?:https?://)?(?:www\.)?youtube\.com/live/").unwrap(),
        Regex::new(r"^(?:https?://)?(?:www\.)?youtube\.com/shorts/").unwrap(),
        Regex::new(r"^(?:https?://)?(?:www\.)?youtu\.be/").unwrap(),
    ];
    static ref TWITTER_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"^(?:https?://)?(?:www\.)?(?:twitter\.com|x\.com)/[^/]+/status/").unwrap(),
        Regex::new(r"^(?:https?://)?t\.co/").unwrap(),
    ];
}

/// Classify a raw URL. Anything that matches no pattern is treated as a
/// direct manifest/stream URL; no well-formedness check happens here, a
/// malformed URL surfaces at the transport layer.
pub fn classify(url: &str) -> UrlClass {
    if YOUTUBE_PATTERNS.iter().any(|p| p.is_match(url)) {
        return UrlClass {
            is_youtube: true,
            is_live_candidate: true,
            is_twitter: false,
        };
    }

    if TWITTER_PATTERNS.iter().any(|p| p.is_match(url)) {
        return UrlClass {
            is_twitter: true,
            ..UrlClass::default()
        };
    }

    UrlClass::default()
}
