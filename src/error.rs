use crate::VertexIndex;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("vertex index {index} is out of range (graph has {len} vertices)")]
    OutOfRange { index: usize, len: usize },

    #[error("vertex {target} is unreachable from the source")]
    Unreachable { target: VertexIndex },

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("unknown algorithm {0:?}, possible options are: (\"lazy\", \"decrease-key\", \"astar\")")]
    UnknownAlgorithm(String),
}

pub type Result<T> = std::result::Result<T, Error>;
