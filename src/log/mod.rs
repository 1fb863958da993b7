//! Log input: reading the harness log and extracting thread completion records.

pub mod parse;
pub mod read;
pub mod record;

pub use parse::{CompletionParser, LogScan};
pub use read::{ReadError, load_log};
