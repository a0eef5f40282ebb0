//! Three-way fetch result for presentation layers.
//!
//! A list endpoint that succeeds with zero rows and one that fails are
//! different situations; `FetchOutcome` keeps them apart so a caller can
//! render "no resources" only for the former.

use crate::error::{ApiError, ErrorKind};

/// Payloads that can be empty on success.
pub trait IsEmpty {
    fn is_empty_payload(&self) -> bool;
}

impl<T> IsEmpty for Vec<T> {
    fn is_empty_payload(&self) -> bool {
        self.is_empty()
    }
}

impl<T> IsEmpty for Option<T> {
    fn is_empty_payload(&self) -> bool {
        self.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome<T> {
    Loaded(T),
    Empty,
    Failed(ErrorKind),
}

impl<T: IsEmpty> FetchOutcome<T> {
    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(payload) if payload.is_empty_payload() => FetchOutcome::Empty,
            Ok(payload) => FetchOutcome::Loaded(payload),
            Err(err) => {
                tracing::debug!(%err, "fetch failed");
                FetchOutcome::Failed(err.kind())
            }
        }
    }
}

impl<T> FetchOutcome<T> {
    pub fn loaded(&self) -> Option<&T> {
        match self {
            FetchOutcome::Loaded(payload) => Some(payload),
            _ => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, FetchOutcome::Failed(_))
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FetchOutcome<U> {
        match self {
            FetchOutcome::Loaded(payload) => FetchOutcome::Loaded(f(payload)),
            FetchOutcome::Empty => FetchOutcome::Empty,
            FetchOutcome::Failed(kind) => FetchOutcome::Failed(kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_success_is_not_an_error() {
        let outcome = FetchOutcome::from_result(Ok(Vec::<u32>::new()));
        assert_eq!(outcome, FetchOutcome::Empty);
        assert!(!outcome.is_failed());
    }

    #[test]
    fn failure_keeps_its_kind() {
        let outcome: FetchOutcome<Vec<u32>> =
            FetchOutcome::from_result(Err(ApiError::Transport("refused".into())));
        assert_eq!(outcome, FetchOutcome::Failed(ErrorKind::Network));
    }

    #[test]
    fn loaded_payload_is_exposed() {
        let outcome = FetchOutcome::from_result(Ok(vec![1, 2]));
        assert_eq!(outcome.loaded(), Some(&vec![1, 2]));
        assert_eq!(outcome.map(|v| v.len()), FetchOutcome::Loaded(2));
    }

    #[test]
    fn option_none_is_empty() {
        assert_eq!(
            FetchOutcome::from_result(Ok(None::<u8>)),
            FetchOutcome::Empty
        );
    }
}
