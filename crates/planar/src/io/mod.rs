//! Text formats around the geometry core.
//!
//! - `.xyz` point lists: a count `n`, then `n` whitespace-separated `x y z`
//!   triples. `z` is read and dropped; writers emit `0`.
//! - `.obj` polygons: `v x y z` vertices plus `f` index lists (reader) or
//!   closed-loop `l i j` edges (writer).
//!
//! Readers take any `BufRead`, writers any `Write`; `load_*`/`save_*` wrap
//! them with file handling. Malformed input is a `ParseError` with a line.

mod obj;
mod xyz;

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use nalgebra::Vector2;
use thiserror::Error;

use crate::plane::Polygon;

pub use obj::{read_obj, write_obj};
pub use xyz::{read_xyz, write_xyz};

/// Malformed input at a 1-based line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {msg}")]
pub struct ParseError {
    pub line: usize,
    pub msg: String,
}

impl ParseError {
    pub(crate) fn new(line: usize, msg: impl Into<String>) -> Self {
        Self {
            line,
            msg: msg.into(),
        }
    }
}

/// Errors from reading or writing point and polygon files.
#[derive(Debug, Error)]
pub enum IoError {
    /// The file could not be opened or created.
    #[error("failed to open file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

fn open(path: &Path) -> Result<BufReader<File>, IoError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| IoError::Open {
            path: path.to_path_buf(),
            source,
        })
}

fn create(path: &Path) -> Result<BufWriter<File>, IoError> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|source| IoError::Open {
            path: path.to_path_buf(),
            source,
        })
}

/// Read a `.xyz` point list from `path`.
pub fn load_xyz<P: AsRef<Path>>(path: P) -> Result<Vec<Vector2<f64>>, IoError> {
    read_xyz(open(path.as_ref())?)
}

/// Write `points` as a `.xyz` point list to `path`.
pub fn save_xyz<P: AsRef<Path>>(path: P, points: &[Vector2<f64>]) -> Result<(), IoError> {
    write_xyz(create(path.as_ref())?, points)
}

/// Read a polygon from the faces of a `.obj` file at `path`.
pub fn load_obj<P: AsRef<Path>>(path: P) -> Result<Polygon, IoError> {
    read_obj(open(path.as_ref())?)
}

/// Write `poly` as a closed `.obj` line loop to `path`.
pub fn save_obj<P: AsRef<Path>>(path: P, poly: &Polygon) -> Result<(), IoError> {
    write_obj(create(path.as_ref())?, poly)
}
