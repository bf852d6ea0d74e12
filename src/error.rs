pub type KeepsakeResult<T> = Result<T, KeepsakeError>;

#[derive(thiserror::Error, Debug)]
pub enum KeepsakeError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("schedule error: {0}")]
    Schedule(String),

    #[error("timer error: {0}")]
    Timer(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl KeepsakeError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn schedule(msg: impl Into<String>) -> Self {
        Self::Schedule(msg.into())
    }

    pub fn timer(msg: impl Into<String>) -> Self {
        Self::Timer(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            KeepsakeError::validation("x")
                .to_string()
                .contains("validation error:")
        );
        assert!(
            KeepsakeError::schedule("x")
                .to_string()
                .contains("schedule error:")
        );
        assert!(KeepsakeError::timer("x").to_string().contains("timer error:"));
        assert!(
            KeepsakeError::serde("x")
                .to_string()
                .contains("serialization error:")
        );
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = KeepsakeError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}
