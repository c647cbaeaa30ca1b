//! Shared types for the adad number-words converters.
//!
//! This crate holds the pieces that do not depend on any lexical data:
//! the closed set of supported languages, case handling, character
//! classification for tokenization and the token type itself.
//!
//! # Architecture
//!
//! - [`language`] -- Supported languages and tag parsing
//! - [`case`] -- Case detection and first-letter capitalization
//! - [`character`] -- Separator classification per language
//! - [`token`] -- Tokens with character offsets

pub mod case;
pub mod character;
pub mod language;
pub mod token;

pub use language::{Language, LanguageError};
