use thiserror::Error;

/// Failure to obtain a complete catalog.
///
/// Every variant is the same condition from the caller's point of view: the
/// catalog is unavailable and nothing can be rendered. The variants only
/// exist so the message says why.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog source unavailable: {0}")]
    Unavailable(String),
    #[error("catalog is malformed: {0}")]
    Malformed(String),
    #[error("catalog has too many {what} ({got} > {max})")]
    LimitExceeded {
        what: &'static str,
        max: usize,
        got: usize,
    },
}

impl CatalogError {
    pub fn code(&self) -> &'static str {
        "data_unavailable"
    }

    pub fn reason(&self) -> &'static str {
        match self {
            CatalogError::Unavailable(_) => "unavailable",
            CatalogError::Malformed(_) => "malformed",
            CatalogError::LimitExceeded { .. } => "limit_exceeded",
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Malformed(e.to_string())
    }
}
