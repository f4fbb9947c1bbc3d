//! iCalendar (RFC 5545) feed encoding.

mod encode;
mod text;

pub use encode::{encode_feed, encode_feed_at, event_uid, format_utc, PRODUCT_ID, UID_DOMAIN};
pub use text::{escape_text, fold_line, unescape_text, unfold_lines, MAX_LINE_OCTETS};
