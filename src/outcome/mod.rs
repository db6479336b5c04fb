// src/outcome/mod.rs
//! Railway-style outcomes: a success carrying a value, or a failure carrying
//! one or more structured [`Error`]s.
//!
//! [`Outcome`] plays the role `Result` plays in std, with two differences
//! aimed at request pipelines: the failure side is always a non-empty
//! [`ErrorList`] so validation can report every broken rule at once, and
//! every error carries a machine-readable code plus an [`ErrorCategory`]
//! that callers can map to a transport status.
//!
//! ```
//! use kitbag::outcome::{Error, Outcome};
//!
//! fn quantity(raw: &str) -> Outcome<u32> {
//!     Outcome::capture(|| raw.parse::<u32>()).ensure(
//!         |qty| *qty > 0,
//!         Error::validation("quantity.zero", "quantity must be positive"),
//!     )
//! }
//!
//! assert_eq!(quantity("3").map(|qty| qty * 2), Outcome::success(6));
//! assert!(quantity("t-shirt").is_failure());
//! ```

mod error;

#[cfg(test)]
mod error_tests;

use std::future::Future;

pub use error::{Error, ErrorCategory, ErrorList, ErrorSource};

/// The result of an operation: either a value or a non-empty list of errors.
///
/// Construct successes with [`Outcome::success`] and failures with
/// [`Outcome::failure`], [`Outcome::failure_all`] or the category shortcuts.
/// Pattern matching on the variants is supported; the [`ErrorList`] inside
/// `Failure` upholds the non-empty invariant on its own.
#[must_use = "this `Outcome` may be a failure, which should be handled"]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Success(T),
    Failure(ErrorList),
}

impl<T> Outcome<T> {
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Builds a failure from a single error.
    ///
    /// # Panics
    ///
    /// Panics if `error` is the [`Error::none`] sentinel. A failure without
    /// an actual error is a programming mistake and is rejected loudly.
    pub fn failure(error: Error) -> Self {
        Self::Failure(ErrorList::new(error))
    }

    /// Builds a failure from an ordered collection of errors.
    ///
    /// # Panics
    ///
    /// Panics if `errors` is empty or contains the [`Error::none`] sentinel.
    pub fn failure_all(errors: Vec<Error>) -> Self {
        Self::Failure(ErrorList::from_vec(errors))
    }

    pub fn failure_list(errors: ErrorList) -> Self {
        Self::Failure(errors)
    }

    pub fn validation(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self::failure(Error::validation(code, description))
    }

    /// Failure carrying several validation errors at once.
    ///
    /// # Panics
    ///
    /// Panics if `errors` is empty or contains the [`Error::none`] sentinel.
    pub fn validation_all(errors: Vec<Error>) -> Self {
        Self::failure_all(errors)
    }

    pub fn not_found(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self::failure(Error::not_found(code, description))
    }

    pub fn conflict(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self::failure(Error::conflict(code, description))
    }

    /// Failure in the [`ErrorCategory::Authentication`] category.
    pub fn unauthorized(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self::failure(Error::authentication(code, description))
    }

    /// Failure in the [`ErrorCategory::Authorization`] category.
    pub fn forbidden(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self::failure(Error::authorization(code, description))
    }

    pub fn unexpected(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self::failure(Error::unexpected(code, description))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Borrows the success value.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a failure.
    pub fn value(&self) -> &T {
        match self {
            Self::Success(value) => value,
            Self::Failure(errors) => {
                panic!("called `Outcome::value()` on a failure: {errors}")
            }
        }
    }

    /// Consumes the outcome and returns the success value.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a failure.
    pub fn into_value(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(errors) => {
                panic!("called `Outcome::into_value()` on a failure: {errors}")
            }
        }
    }

    pub fn value_opt(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Consumes the outcome, discarding the errors of a failure.
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Borrows the error list.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a success.
    pub fn errors(&self) -> &ErrorList {
        match self {
            Self::Success(_) => panic!("called `Outcome::errors()` on a success"),
            Self::Failure(errors) => errors,
        }
    }

    pub fn errors_opt(&self) -> Option<&ErrorList> {
        match self {
            Self::Success(_) => None,
            Self::Failure(errors) => Some(errors),
        }
    }

    /// The first error of a failure, if any.
    pub fn primary_error(&self) -> Option<&Error> {
        self.errors_opt().map(ErrorList::primary)
    }

    /// Category of the primary error; [`ErrorCategory::Generic`] on success.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Success(_) => ErrorCategory::Generic,
            Self::Failure(errors) => errors.primary().category(),
        }
    }

    /// Transforms the success value, passing failures through untouched.
    pub fn map<U>(self, op: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Self::Success(value) => Outcome::Success(op(value)),
            Self::Failure(errors) => Outcome::Failure(errors),
        }
    }

    /// Chains another fallible step. `op` runs only on success; the errors
    /// of a failure are forwarded without invoking it.
    pub fn and_then<U>(self, op: impl FnOnce(T) -> Outcome<U>) -> Outcome<U> {
        match self {
            Self::Success(value) => op(value),
            Self::Failure(errors) => Outcome::Failure(errors),
        }
    }

    /// Turns a success into a failure when `predicate` rejects the value.
    ///
    /// # Panics
    ///
    /// Panics if the predicate rejects and `error` is the [`Error::none`]
    /// sentinel.
    pub fn ensure(self, predicate: impl FnOnce(&T) -> bool, error: Error) -> Self {
        self.ensure_with(predicate, |_| error)
    }

    /// Like [`Outcome::ensure`], building the error lazily from the
    /// rejected value.
    pub fn ensure_with(
        self,
        predicate: impl FnOnce(&T) -> bool,
        error: impl FnOnce(&T) -> Error,
    ) -> Self {
        match self {
            Self::Success(value) => {
                if predicate(&value) {
                    Self::Success(value)
                } else {
                    let error = error(&value);
                    Self::failure(error)
                }
            }
            failure @ Self::Failure(_) => failure,
        }
    }

    /// Runs a side effect on the success value, returning the outcome as-is.
    pub fn inspect(self, op: impl FnOnce(&T)) -> Self {
        if let Self::Success(value) = &self {
            op(value);
        }
        self
    }

    /// Runs a side effect on the errors of a failure, returning the outcome
    /// as-is. The primary error is reachable via [`ErrorList::primary`].
    pub fn inspect_err(self, op: impl FnOnce(&ErrorList)) -> Self {
        if let Self::Failure(errors) = &self {
            op(errors);
        }
        self
    }

    /// Collapses both branches into a single value.
    pub fn resolve<R>(
        self,
        on_success: impl FnOnce(T) -> R,
        on_failure: impl FnOnce(ErrorList) -> R,
    ) -> R {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(errors) => on_failure(errors),
        }
    }

    /// Async form of [`Outcome::map`].
    pub async fn map_async<U, Fut>(self, op: impl FnOnce(T) -> Fut) -> Outcome<U>
    where
        Fut: Future<Output = U>,
    {
        match self {
            Self::Success(value) => Outcome::Success(op(value).await),
            Self::Failure(errors) => Outcome::Failure(errors),
        }
    }

    /// Async form of [`Outcome::and_then`]. `op` is not invoked on failure.
    pub async fn and_then_async<U, Fut>(self, op: impl FnOnce(T) -> Fut) -> Outcome<U>
    where
        Fut: Future<Output = Outcome<U>>,
    {
        match self {
            Self::Success(value) => op(value).await,
            Self::Failure(errors) => Outcome::Failure(errors),
        }
    }

    /// Runs `op`, converting an `Err` into an [`ErrorCategory::Unexpected`]
    /// failure. The error's code is the source type's short name, its
    /// description the source's display output, and the source itself stays
    /// attached for diagnostics.
    pub fn capture<E>(op: impl FnOnce() -> Result<T, E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match op() {
            Ok(value) => Self::Success(value),
            Err(source) => Self::Failure(ErrorList::new(convert_unexpected(source))),
        }
    }

    /// Runs `op`, letting `handler` shape the failure error instead of the
    /// [`Outcome::capture`] conversion.
    ///
    /// # Panics
    ///
    /// Panics if `handler` returns the [`Error::none`] sentinel.
    pub fn capture_with<E>(
        op: impl FnOnce() -> Result<T, E>,
        handler: impl FnOnce(E) -> Error,
    ) -> Self {
        match op() {
            Ok(value) => Self::Success(value),
            Err(source) => Self::failure(handler(source)),
        }
    }

    /// Async form of [`Outcome::capture`].
    pub async fn capture_async<E, Fut>(op: impl FnOnce() -> Fut) -> Self
    where
        Fut: Future<Output = Result<T, E>>,
        E: std::error::Error + Send + Sync + 'static,
    {
        match op().await {
            Ok(value) => Self::Success(value),
            Err(source) => Self::Failure(ErrorList::new(convert_unexpected(source))),
        }
    }
}

impl Outcome<()> {
    /// Merges several unit outcomes into one, accumulating every error in
    /// input order. All successes merge into a single success.
    pub fn combine(outcomes: impl IntoIterator<Item = Outcome<()>>) -> Self {
        let mut errors: Vec<Error> = Vec::new();
        for outcome in outcomes {
            if let Self::Failure(list) = outcome {
                errors.extend(list);
            }
        }
        if errors.is_empty() {
            Self::Success(())
        } else {
            Self::Failure(ErrorList::from_vec(errors))
        }
    }
}

/// Collects `Outcome<T>`s into an `Outcome<Vec<T>>`, accumulating every
/// error in input order when any element fails.
impl<T> FromIterator<Outcome<T>> for Outcome<Vec<T>> {
    fn from_iter<I: IntoIterator<Item = Outcome<T>>>(iter: I) -> Self {
        let mut values = Vec::new();
        let mut errors: Vec<Error> = Vec::new();
        for outcome in iter {
            match outcome {
                Outcome::Success(value) => values.push(value),
                Outcome::Failure(list) => errors.extend(list),
            }
        }
        if errors.is_empty() {
            Outcome::Success(values)
        } else {
            Outcome::Failure(ErrorList::from_vec(errors))
        }
    }
}

impl<T, E: Into<Error>> From<Result<T, E>> for Outcome<T> {
    /// # Panics
    ///
    /// Panics if the `Err` converts into the [`Error::none`] sentinel.
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::failure(error.into()),
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, ErrorList> {
    fn from(outcome: Outcome<T>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(errors) => Err(errors),
        }
    }
}

fn convert_unexpected<E>(source: E) -> Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    tracing::warn!(error = %source, "captured error converted to unexpected failure");
    let full_name = std::any::type_name::<E>();
    let code = full_name.rsplit("::").next().unwrap_or(full_name);
    Error::unexpected(code, source.to_string()).with_source(source)
}
