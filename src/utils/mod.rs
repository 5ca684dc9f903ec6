pub mod format_utils;
pub mod url_utils;

pub use format_utils::{bytes_to_kb, format_layout_shift, format_millis, format_seconds, score_to_percent};
pub use url_utils::{build_pagespeed_url, normalize_target};
