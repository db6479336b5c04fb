// src/outcome/error.rs
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Shared handle to the underlying cause of an [`Error`], kept for diagnostics.
pub type ErrorSource = Arc<dyn std::error::Error + Send + Sync + 'static>;

/// Broad classification of a failure, independent of any transport.
///
/// Callers that expose failures over HTTP conventionally map `Validation` to
/// 400, `NotFound` to 404, `Conflict` to 409, `Authentication` to 401,
/// `Authorization` to 403 and `Unexpected` to 500. Nothing in this crate
/// performs that mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Default category for failures that fit nowhere else.
    Generic,
    /// Input failed a business or format rule.
    Validation,
    /// The requested resource does not exist.
    NotFound,
    /// The operation conflicts with current state.
    Conflict,
    /// The caller is not authenticated.
    Authentication,
    /// The caller is authenticated but not allowed.
    Authorization,
    /// An unanticipated condition, usually a captured lower-level error.
    Unexpected,
}

impl ErrorCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::Validation => "validation",
            Self::NotFound => "not_found",
            Self::Conflict => "conflict",
            Self::Authentication => "authentication",
            Self::Authorization => "authorization",
            Self::Unexpected => "unexpected",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single failure: a machine-readable code, a human-readable description
/// and a [`ErrorCategory`].
///
/// Equality and hashing consider only the code, description and category.
/// The retained source is diagnostic metadata and never affects comparisons
/// or serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Error {
    code: String,
    description: String,
    category: ErrorCategory,
    #[serde(skip)]
    source: Option<ErrorSource>,
}

impl Error {
    pub fn new(
        code: impl Into<String>,
        description: impl Into<String>,
        category: ErrorCategory,
    ) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
            category,
            source: None,
        }
    }

    /// The absence-of-error sentinel: empty code, empty description,
    /// [`ErrorCategory::Generic`].
    ///
    /// It exists for interop with callers that model "no error" as a value.
    /// Failure constructors reject it; see [`super::Outcome::failure`].
    pub fn none() -> Self {
        Self::new("", "", ErrorCategory::Generic)
    }

    /// Whether this is the [`Error::none`] sentinel.
    pub fn is_none(&self) -> bool {
        self.code.is_empty()
            && self.description.is_empty()
            && self.category == ErrorCategory::Generic
    }

    pub fn generic(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(code, description, ErrorCategory::Generic)
    }

    pub fn validation(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(code, description, ErrorCategory::Validation)
    }

    pub fn not_found(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(code, description, ErrorCategory::NotFound)
    }

    pub fn conflict(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(code, description, ErrorCategory::Conflict)
    }

    pub fn authentication(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(code, description, ErrorCategory::Authentication)
    }

    pub fn authorization(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(code, description, ErrorCategory::Authorization)
    }

    pub fn unexpected(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(code, description, ErrorCategory::Unexpected)
    }

    /// Attaches the lower-level error this one was derived from.
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Arc::new(source));
        self
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> ErrorCategory {
        self.category
    }

    /// The retained cause, if one was attached via [`Error::with_source`].
    pub fn source_ref(&self) -> Option<&ErrorSource> {
        self.source.as_ref()
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
            && self.description == other.description
            && self.category == other.category
    }
}

impl Eq for Error {}

impl std::hash::Hash for Error {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.code.hash(state);
        self.description.hash(state);
        self.category.hash(state);
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.code.is_empty() {
            f.write_str(&self.description)
        } else {
            write!(f, "{}: {}", self.code, self.description)
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|source| &**source as &(dyn std::error::Error + 'static))
    }
}

/// Non-empty, ordered collection of [`Error`]s carried by a failed outcome.
///
/// The first element is the primary error. Emptiness and the
/// [`Error::none`] sentinel are rejected at construction, so holders of an
/// `ErrorList` can rely on at least one real error being present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorList(Vec<Error>);

impl ErrorList {
    /// Builds a list holding a single error.
    ///
    /// # Panics
    ///
    /// Panics if `error` is the [`Error::none`] sentinel.
    pub fn new(error: Error) -> Self {
        assert!(
            !error.is_none(),
            "an error list cannot hold the none sentinel"
        );
        Self(vec![error])
    }

    /// Builds a list from an ordered collection of errors.
    ///
    /// # Panics
    ///
    /// Panics if `errors` is empty or contains the [`Error::none`] sentinel.
    pub fn from_vec(errors: Vec<Error>) -> Self {
        assert!(!errors.is_empty(), "an error list cannot be empty");
        assert!(
            errors.iter().all(|error| !error.is_none()),
            "an error list cannot hold the none sentinel"
        );
        Self(errors)
    }

    /// The first error in the list.
    pub fn primary(&self) -> &Error {
        &self.0[0]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Error> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; the list is non-empty by construction.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains_category(&self, category: ErrorCategory) -> bool {
        self.0.iter().any(|error| error.category == category)
    }

    pub fn as_slice(&self) -> &[Error] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<Error> {
        self.0
    }
}

impl From<Error> for ErrorList {
    /// # Panics
    ///
    /// Panics if `error` is the [`Error::none`] sentinel.
    fn from(error: Error) -> Self {
        Self::new(error)
    }
}

impl AsRef<[Error]> for ErrorList {
    fn as_ref(&self) -> &[Error] {
        &self.0
    }
}

impl IntoIterator for ErrorList {
    type Item = Error;
    type IntoIter = std::vec::IntoIter<Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ErrorList {
    type Item = &'a Error;
    type IntoIter = std::slice::Iter<'a, Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ErrorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, error) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}
