pub mod ts;

pub use ts::{parse_ts_file, parse_ts_str};
