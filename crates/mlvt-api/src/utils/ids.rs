//! Path id parsing.
//!
//! Ids arrive as raw path segments so that a malformed id is reported with a
//! fixed message before any store or issuer call is made.

use mlvt_core::models::{UserId, VideoId};
use mlvt_core::AppError;

use crate::constants::messages;

fn parse_id(raw: &str) -> Option<u64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

pub fn parse_video_id(raw: &str) -> Result<VideoId, AppError> {
    parse_id(raw).ok_or_else(|| AppError::InvalidInput(messages::INVALID_VIDEO_ID.to_string()))
}

pub fn parse_user_id(raw: &str) -> Result<UserId, AppError> {
    parse_id(raw).ok_or_else(|| AppError::InvalidInput(messages::INVALID_USER_ID.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_ids() {
        assert_eq!(parse_video_id("42").unwrap(), 42);
        assert_eq!(parse_user_id("0").unwrap(), 0);
        assert_eq!(parse_video_id("18446744073709551615").unwrap(), u64::MAX);
    }

    #[test]
    fn test_parse_rejects_malformed_ids() {
        for raw in ["", "abc", "-1", "+1", "1.5", " 1", "18446744073709551616"] {
            match parse_video_id(raw) {
                Err(AppError::InvalidInput(msg)) => assert_eq!(msg, "invalid video ID"),
                other => panic!("expected invalid video ID for {:?}, got {:?}", raw, other),
            }
        }
        match parse_user_id("x") {
            Err(AppError::InvalidInput(msg)) => assert_eq!(msg, "invalid user ID"),
            other => panic!("expected invalid user ID, got {:?}", other),
        }
    }
}
