use std::fmt;

#[derive(Debug)]
pub enum LinAlgError {
    DimensionMismatch(String),
    NotSquare(String),
    NonConvergence(String),
    InvalidArgument(String),
    Singular(String),
}

impl fmt::Display for LinAlgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinAlgError::DimensionMismatch(msg) => write!(f, "Dimension Mismatch: {}", msg),
            LinAlgError::NotSquare(msg) => write!(f, "Not Square: {}", msg),
            LinAlgError::NonConvergence(msg) => write!(f, "Non-Convergence: {}", msg),
            LinAlgError::InvalidArgument(msg) => write!(f, "Invalid Argument: {}", msg),
            LinAlgError::Singular(msg) => write!(f, "Singular System: {}", msg),
        }
    }
}

impl std::error::Error for LinAlgError {}

impl LinAlgError {
    pub fn dimension_mismatch(message: &str) -> Self { LinAlgError::DimensionMismatch(message.to_string()) }
    pub fn not_square(message: &str) -> Self { LinAlgError::NotSquare(message.to_string()) }
    pub fn non_convergence(message: &str) -> Self { LinAlgError::NonConvergence(message.to_string()) }
    pub fn invalid_argument(message: &str) -> Self { LinAlgError::InvalidArgument(message.to_string()) }
    pub fn singular(message: &str) -> Self { LinAlgError::Singular(message.to_string()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test] fn test_dimension_mismatch() {
        let err = LinAlgError::dimension_mismatch("2x3 * 2x2");
        assert_eq!(format!("{}", err), "Dimension Mismatch: 2x3 * 2x2");
    }
    #[test] fn test_not_square() {
        let err = LinAlgError::not_square("trace of 2x3");
        assert_eq!(format!("{}", err), "Not Square: trace of 2x3");
    }
    #[test] fn test_non_convergence() {
        let err = LinAlgError::non_convergence("budget exhausted");
        assert_eq!(format!("{}", err), "Non-Convergence: budget exhausted");
    }
    #[test] fn test_invalid_argument() {
        let err = LinAlgError::invalid_argument("ragged rows");
        assert_eq!(format!("{}", err), "Invalid Argument: ragged rows");
    }
    #[test] fn test_singular() {
        let err = LinAlgError::singular("zero pivot");
        assert_eq!(format!("{}", err), "Singular System: zero pivot");
    }
}
