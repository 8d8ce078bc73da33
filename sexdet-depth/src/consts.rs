/// How many lines are read between spinner refreshes.
pub const PROGRESS_UPDATE_INTERVAL: u64 = 100_000;
