// src/enums.rs
//! Metadata lookups over explicitly registered enum variants.
//!
//! Implementing [`EnumMeta`] registers an enum's variants in declaration
//! order together with a stable name, an optional human-facing display name
//! and a description. The free functions in this module then answer the
//! usual reflection questions (parse by name, list display names, map an
//! ordinal back to a variant) without any runtime scanning.

use thiserror::Error;

use crate::outcome::ErrorCategory;

/// Registration point for enum metadata.
///
/// `VARIANTS` must list every variant exactly once, in declaration order.
/// `name` is the stable identifier used by [`parse`]; `display_name` and
/// `description` default to it when not overridden.
pub trait EnumMeta: Sized + Copy + PartialEq + 'static {
    const VARIANTS: &'static [Self];

    fn name(&self) -> &'static str;

    fn display_name(&self) -> &'static str {
        self.name()
    }

    fn description(&self) -> &'static str {
        self.name()
    }

    /// Position of this variant within `VARIANTS`.
    ///
    /// # Panics
    ///
    /// Panics if the variant was left out of `VARIANTS`, which is a broken
    /// registration.
    fn ordinal(&self) -> usize {
        Self::VARIANTS
            .iter()
            .position(|variant| variant == self)
            .expect("every variant must be registered in VARIANTS")
    }
}

/// A metadata lookup that found no matching variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnumLookupError {
    #[error("no {type_name} variant named `{query}`")]
    UnknownName {
        type_name: &'static str,
        query: String,
    },
    #[error("no {type_name} variant with display name `{query}`")]
    UnknownDisplayName {
        type_name: &'static str,
        query: String,
    },
    #[error("no {type_name} variant with description `{query}`")]
    UnknownDescription {
        type_name: &'static str,
        query: String,
    },
    #[error("{type_name} has no variant at ordinal {ordinal}")]
    InvalidOrdinal {
        type_name: &'static str,
        ordinal: usize,
    },
}

/// Every registered variant, in declaration order.
pub fn variants<T: EnumMeta>() -> &'static [T] {
    T::VARIANTS
}

/// Finds the variant whose name matches `name`, ignoring ASCII case.
pub fn parse<T: EnumMeta>(name: &str) -> Result<T, EnumLookupError> {
    T::VARIANTS
        .iter()
        .find(|variant| variant.name().eq_ignore_ascii_case(name))
        .copied()
        .ok_or_else(|| EnumLookupError::UnknownName {
            type_name: short_type_name::<T>(),
            query: name.to_owned(),
        })
}

/// Finds the variant whose name matches `name` exactly.
pub fn parse_exact<T: EnumMeta>(name: &str) -> Result<T, EnumLookupError> {
    T::VARIANTS
        .iter()
        .find(|variant| variant.name() == name)
        .copied()
        .ok_or_else(|| EnumLookupError::UnknownName {
            type_name: short_type_name::<T>(),
            query: name.to_owned(),
        })
}

/// Finds the variant carrying the given display name.
pub fn by_display_name<T: EnumMeta>(display_name: &str) -> Result<T, EnumLookupError> {
    T::VARIANTS
        .iter()
        .find(|variant| variant.display_name() == display_name)
        .copied()
        .ok_or_else(|| EnumLookupError::UnknownDisplayName {
            type_name: short_type_name::<T>(),
            query: display_name.to_owned(),
        })
}

/// Finds the variant carrying the given description.
pub fn by_description<T: EnumMeta>(description: &str) -> Result<T, EnumLookupError> {
    T::VARIANTS
        .iter()
        .find(|variant| variant.description() == description)
        .copied()
        .ok_or_else(|| EnumLookupError::UnknownDescription {
            type_name: short_type_name::<T>(),
            query: description.to_owned(),
        })
}

/// Description of the variant carrying the given display name.
pub fn description_for_display_name<T: EnumMeta>(
    display_name: &str,
) -> Result<&'static str, EnumLookupError> {
    by_display_name::<T>(display_name).map(|variant| variant.description())
}

/// `(variant, display name)` pairs for every variant, in declaration order.
pub fn display_names<T: EnumMeta>() -> Vec<(T, &'static str)> {
    T::VARIANTS
        .iter()
        .map(|variant| (*variant, variant.display_name()))
        .collect()
}

/// `(variant, description)` pairs for every variant, in declaration order.
pub fn descriptions<T: EnumMeta>() -> Vec<(T, &'static str)> {
    T::VARIANTS
        .iter()
        .map(|variant| (*variant, variant.description()))
        .collect()
}

/// `(ordinal, description)` pairs for every variant, in declaration order.
pub fn ordinals_with_descriptions<T: EnumMeta>() -> Vec<(usize, &'static str)> {
    T::VARIANTS
        .iter()
        .map(|variant| (variant.ordinal(), variant.description()))
        .collect()
}

/// Maps an ordinal back to its variant.
pub fn from_ordinal<T: EnumMeta>(ordinal: usize) -> Result<T, EnumLookupError> {
    T::VARIANTS
        .iter()
        .find(|variant| variant.ordinal() == ordinal)
        .copied()
        .ok_or_else(|| EnumLookupError::InvalidOrdinal {
            type_name: short_type_name::<T>(),
            ordinal,
        })
}

/// Whether any variant answers to the given ordinal.
pub fn is_valid_ordinal<T: EnumMeta>(ordinal: usize) -> bool {
    T::VARIANTS.iter().any(|variant| variant.ordinal() == ordinal)
}

fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

impl EnumMeta for ErrorCategory {
    const VARIANTS: &'static [Self] = &[
        Self::Generic,
        Self::Validation,
        Self::NotFound,
        Self::Conflict,
        Self::Authentication,
        Self::Authorization,
        Self::Unexpected,
    ];

    fn name(&self) -> &'static str {
        match self {
            Self::Generic => "Generic",
            Self::Validation => "Validation",
            Self::NotFound => "NotFound",
            Self::Conflict => "Conflict",
            Self::Authentication => "Authentication",
            Self::Authorization => "Authorization",
            Self::Unexpected => "Unexpected",
        }
    }

    fn display_name(&self) -> &'static str {
        self.as_str()
    }

    fn description(&self) -> &'static str {
        match self {
            Self::Generic => "failure with no more specific category",
            Self::Validation => "input failed a business or format rule",
            Self::NotFound => "the requested resource does not exist",
            Self::Conflict => "the operation conflicts with current state",
            Self::Authentication => "the caller is not authenticated",
            Self::Authorization => "the caller is not allowed",
            Self::Unexpected => "unanticipated condition or captured error",
        }
    }
}
