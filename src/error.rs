pub type LuxrigResult<T> = Result<T, LuxrigError>;

#[derive(thiserror::Error, Debug)]
pub enum LuxrigError {
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("illegal state: {0}")]
    IllegalState(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LuxrigError {
    pub fn invalid_geometry(msg: impl Into<String>) -> Self {
        Self::InvalidGeometry(msg.into())
    }

    pub fn illegal_state(msg: impl Into<String>) -> Self {
        Self::IllegalState(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            LuxrigError::invalid_geometry("x")
                .to_string()
                .contains("invalid geometry:")
        );
        assert!(
            LuxrigError::illegal_state("x")
                .to_string()
                .contains("illegal state:")
        );
        assert!(
            LuxrigError::validation("x")
                .to_string()
                .contains("validation error:")
        );
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = LuxrigError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}
