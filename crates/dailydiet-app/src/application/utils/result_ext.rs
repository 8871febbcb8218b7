use dailydiet_domain::shared::DomainError;

/// Extension trait for Result types to simplify error handling
pub trait ResultExt<T, E> {
    /// Convert error to DomainError::Infrastructure
    fn to_infra_err(self) -> Result<T, DomainError>;

    /// Convert error to DomainError::InvalidInput, prefixed with `what`
    fn to_input_err(self, what: &str) -> Result<T, DomainError>;
}

impl<T, E: std::fmt::Display> ResultExt<T, E> for Result<T, E> {
    fn to_infra_err(self) -> Result<T, DomainError> {
        self.map_err(|e| DomainError::Infrastructure(e.to_string()))
    }

    fn to_input_err(self, what: &str) -> Result<T, DomainError> {
        self.map_err(|e| DomainError::InvalidInput(format!("{}: {}", what, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_infra_err() {
        let result: Result<i32, &str> = Err("bind failed");
        match result.to_infra_err() {
            Err(DomainError::Infrastructure(msg)) => assert_eq!(msg, "bind failed"),
            _ => panic!("Expected Infrastructure error"),
        }
    }

    #[test]
    fn test_to_input_err() {
        let result: Result<u32, _> = "abc".parse::<u32>();
        match result.to_input_err("page") {
            Err(DomainError::InvalidInput(msg)) => assert!(msg.starts_with("page: ")),
            _ => panic!("Expected InvalidInput error"),
        }
    }
}
