#[derive(Debug)]
pub enum GridError {
    /// Backing storage length does not equal `sx * sy * sz`.
    DimensionMismatch { expected: usize, actual: usize },
    /// A row or column of a nested input array has the wrong length.
    NonRectangular {
        at: (usize, usize),
        expected: usize,
        actual: usize,
    },
    /// Dimensions whose half-lattice coordinates overflow `i32`.
    TooLarge { dims: (usize, usize, usize) },
    /// Grid text ended before the `sx sy sz` header.
    MissingHeader,
    /// A token in grid text is not a valid integer of the expected range.
    Parse { token: String, position: usize },
    Io(std::io::Error),
}

impl std::fmt::Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GridError::DimensionMismatch { expected, actual } => write!(
                f,
                "grid storage has {} cells, dimensions require {}",
                actual, expected
            ),
            GridError::NonRectangular {
                at,
                expected,
                actual,
            } => write!(
                f,
                "non-rectangular grid at [{}][{}]: expected {} entries, found {}",
                at.0, at.1, expected, actual
            ),
            GridError::TooLarge { dims } => write!(
                f,
                "grid {}x{}x{} exceeds the addressable vertex lattice",
                dims.0, dims.1, dims.2
            ),
            GridError::MissingHeader => write!(f, "grid text is missing the size header"),
            GridError::Parse { token, position } => {
                write!(f, "invalid grid token {:?} at position {}", token, position)
            }
            GridError::Io(e) => write!(f, "grid io: {}", e),
        }
    }
}

impl std::error::Error for GridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GridError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GridError {
    fn from(e: std::io::Error) -> Self {
        GridError::Io(e)
    }
}
