use std::error;
use std::fmt;

/// Errors produced while constructing a `Tree` from caller-supplied mesh data.
///
/// The traversal and intersection paths never produce an `Error`: once a
/// `Tree` exists it is queried with `raycast`, which returns `Option<RayHit>`
/// rather than a `Result` (a miss is not a failure).
#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// Vertex buffer length is not a multiple of 3 (indexed mode) or 9
    /// (triangle-soup mode).
    VertexBufferNotTriple { len: usize, multiple_of: usize },
    /// Index buffer length is not a multiple of 3.
    IndexBufferNotTriple { len: usize },
    /// An index buffer entry references a vertex past the end of the
    /// vertex buffer.
    IndexOutOfRange { index: u32, vertex_count: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::VertexBufferNotTriple { len, multiple_of } => write!(
                f,
                "vertex buffer length {} is not a multiple of {}",
                len, multiple_of
            ),
            Error::IndexBufferNotTriple { len } => {
                write!(f, "index buffer length {} is not a multiple of 3", len)
            }
            Error::IndexOutOfRange { index, vertex_count } => write!(
                f,
                "index {} is out of range for {} vertices",
                index, vertex_count
            ),
        }
    }
}

impl error::Error for Error {}
