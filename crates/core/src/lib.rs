//! Core of the calfeed project: feed encoding, cache consistency and the
//! storage seams the server plugs into.

pub mod calendar;
pub mod feed;
pub mod http_mapping;
pub mod ics;
pub mod serde;
pub mod storage;
