// src/strings/mod.rs
//! Text helpers split by concern: [`casing`] converts between identifier
//! styles, [`validate`] answers shape questions, and [`manipulate`]
//! reshapes content.

pub mod casing;
pub mod manipulate;
pub mod validate;

#[cfg(test)]
mod casing_tests;
#[cfg(test)]
mod validate_tests;
