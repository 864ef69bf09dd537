use std::fmt;

/// The operation that failed, carried by dimension and overflow errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Sub,
    Distance,
    Scale,
    Divide,
    Convert,
    Neighbors,
    GridAccess,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Add => write!(f, "add"),
            Operation::Sub => write!(f, "sub"),
            Operation::Distance => write!(f, "distance"),
            Operation::Scale => write!(f, "scale"),
            Operation::Divide => write!(f, "divide"),
            Operation::Convert => write!(f, "convert"),
            Operation::Neighbors => write!(f, "neighbors"),
            Operation::GridAccess => write!(f, "grid access"),
        }
    }
}

#[derive(Debug)]
pub enum GridError {
    DimensionMismatch {
        op: Operation,
        expected: usize,
        found: usize,
    },
    OutOfBounds {
        axis: usize,
        value: f64,
        dim_length: usize,
    },
    Allocation {
        dim: usize,
        dim_length: usize,
    },
    LengthMismatch {
        expected: usize,
        found: usize,
    },
    DivisionByZero,
    Overflow {
        op: Operation,
    },
    Config(String),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::DimensionMismatch { op, expected, found } => write!(
                f,
                "Dimension mismatch in {}: expected {}, found {}",
                op, expected, found
            ),
            GridError::OutOfBounds { axis, value, dim_length } => write!(
                f,
                "Out of bounds: axis {} has value {}, valid range is [0, {})",
                axis, value, dim_length
            ),
            GridError::Allocation { dim, dim_length } => write!(
                f,
                "Allocation error: cannot allocate {}^{} elements",
                dim_length, dim
            ),
            GridError::LengthMismatch { expected, found } => write!(
                f,
                "Length mismatch: expected {} elements, found {}",
                expected, found
            ),
            GridError::DivisionByZero => write!(f, "Division by zero"),
            GridError::Overflow { op } => write!(f, "Overflow in {}: result does not fit the component type", op),
            GridError::Config(e) => write!(f, "Config error: {}", e),
        }
    }
}

impl std::error::Error for GridError {}

impl From<serde_json::Error> for GridError {
    fn from(err: serde_json::Error) -> Self {
        GridError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GridError>;
