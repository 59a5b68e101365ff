use thiserror::Error;

/// A status code or name that is not in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidCat {
    #[error("{0} is not a valid status code")]
    Code(u16),

    #[error("{0} is not a valid status code name")]
    Name(String),
}

/// Errors returned by the cat accessors.
#[derive(Debug, Error)]
pub enum HttpCatError {
    /// The input did not match any catalog entry. No request was made.
    #[error(transparent)]
    InvalidCat(#[from] InvalidCat),

    /// The image request failed at the transport level.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
}

impl HttpCatError {
    /// The lookup failure, if this error is one.
    #[must_use]
    pub const fn as_invalid_cat(&self) -> Option<&InvalidCat> {
        match self {
            Self::InvalidCat(err) => Some(err),
            Self::Request(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_include_the_input() {
        assert_eq!(
            InvalidCat::Code(999).to_string(),
            "999 is not a valid status code"
        );
        assert_eq!(
            InvalidCat::Name("Not A Cat".into()).to_string(),
            "Not A Cat is not a valid status code name"
        );
    }

    #[test]
    fn invalid_cat_passes_through_transparently() {
        let err = HttpCatError::from(InvalidCat::Code(7));
        assert_eq!(err.to_string(), "7 is not a valid status code");
        assert_eq!(err.as_invalid_cat(), Some(&InvalidCat::Code(7)));
    }
}
