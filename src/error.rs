use std::io;
use std::path::PathBuf;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed benchmark CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Records are counted from 1, header excluded.
    #[error("record {record}: thread count must be at least 1")]
    ZeroThreads { record: usize },

    #[error("record {record}: elapsed time {time} is not a positive number of seconds")]
    InvalidTime { record: usize, time: f64 },

    #[error("no single-thread timing recorded for baseline `{0}`")]
    MissingBaseline(String),
}
