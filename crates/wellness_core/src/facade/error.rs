//! Public error taxonomy of the façade.

use crate::model::identity::IdentityError;
use crate::model::validation::ModelValidationError;
use crate::repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Failure surfaced to façade callers.
#[derive(Debug)]
pub enum ServiceError {
    /// Caller identity is blank or anonymous.
    NotAuthenticated(IdentityError),
    /// Meeting id is absent from the caller's meeting log.
    NotFound(String),
    /// Record violates a model invariant.
    Invalid(ModelValidationError),
    /// Meeting id is already present in the caller's meeting log.
    DuplicateMeeting(String),
    /// Persistence failed or returned unreadable data.
    StorageUnavailable(String),
}

impl ServiceError {
    /// Stable machine-readable code used in logs and bridge envelopes.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotAuthenticated(_) => "not_authenticated",
            Self::NotFound(_) => "not_found",
            Self::Invalid(_) => "invalid_input",
            Self::DuplicateMeeting(_) => "duplicate_meeting",
            Self::StorageUnavailable(_) => "storage_unavailable",
        }
    }
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAuthenticated(err) => write!(f, "not authenticated: {err}"),
            Self::NotFound(id) => write!(f, "meeting not found: {id}"),
            Self::Invalid(err) => write!(f, "invalid input: {err}"),
            Self::DuplicateMeeting(id) => write!(f, "meeting already exists: {id}"),
            Self::StorageUnavailable(details) => write!(f, "storage unavailable: {details}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotAuthenticated(err) => Some(err),
            Self::Invalid(err) => Some(err),
            _ => None,
        }
    }
}

impl From<IdentityError> for ServiceError {
    fn from(value: IdentityError) -> Self {
        Self::NotAuthenticated(value)
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Validation(err) => Self::Invalid(err),
            RepoError::NotFound(id) => Self::NotFound(id),
            RepoError::DuplicateMeeting(id) => Self::DuplicateMeeting(id),
            other => Self::StorageUnavailable(other.to_string()),
        }
    }
}
