use thiserror::Error;
use uuid::Uuid;

pub type StoreResult<T> = Result<T, StoreError>;

/// Errors returned by contact lookups and mutations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("no contact with id {0}")]
    IdNotFound(Uuid),
    #[error("no contact whose name contains {0:?}")]
    NameNotFound(String),
}

impl StoreError {
    /// True for every "nothing matched" outcome.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::IdNotFound(_) | StoreError::NameNotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_missing_key() {
        let id = Uuid::nil();
        assert_eq!(
            StoreError::IdNotFound(id).to_string(),
            "no contact with id 00000000-0000-0000-0000-000000000000"
        );
        assert_eq!(
            StoreError::NameNotFound("zz".into()).to_string(),
            "no contact whose name contains \"zz\""
        );
    }
}
