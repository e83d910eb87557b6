//! Field extractors. Each one scans raw message text for a single field and
//! returns `None` when nothing matches; the first matching pattern wins.

pub mod contact;
pub mod date;
pub mod location;
pub mod price;
pub mod time;

pub use contact::extract_contact_info;
pub use date::extract_date;
pub use location::{extract_location, extract_organizer};
pub use price::extract_price;
pub use time::extract_time;

/// 依字元數截斷後去除空白
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => text[..byte_idx].trim().to_string(),
        None => text.trim().to_string(),
    }
}
