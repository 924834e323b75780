use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct FiberError {
    message: String,
}

impl FiberError {
    pub fn error(msg: &str) -> Self {
        FiberError {
            message: String::from(msg),
        }
    }
}

impl fmt::Display for FiberError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for FiberError {}

impl From<std::io::Error> for FiberError {
    fn from(error: std::io::Error) -> Self {
        return FiberError::error(&error.to_string());
    }
}
