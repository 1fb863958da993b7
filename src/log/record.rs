/// One completion line: `Thread <thread_id> executed <operations> operations`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreadRecord {
    pub thread_id: u64,
    /// `None` when the logged value does not fit in `u64`.
    pub operations: Option<u64>,
}
