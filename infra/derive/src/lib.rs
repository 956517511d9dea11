#![allow(unreachable_pub)]

//! # Macros
//!
//! Procedural macros shared by the `FoodPacker` crates.
//!
//! Only one macro lives here for now: [`macro@foodpacker_error`], which turns a plain enum
//! into the error type shape every crate in the workspace uses (named fields, optional
//! context, `?`-friendly conversions).

mod error;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for crate-level error enums.
///
/// # Generated Items
///
/// * `#[derive(Debug, thiserror::Error)]` unless already derived.
/// * `<Name>Ext` trait with `.context(...)` for `Result<T, Name>`, and for
///   `Result<T, Source>` on every variant that wraps a source error.
/// * `From<Source>` for those same variants.
/// * `From<&'static str>` and `From<String>` when an `Internal { message, context }`
///   variant exists.
/// * A private `format_context` helper to use inside `#[error(...)]` strings.
///
/// # Requirements
///
/// 1. Only enums are accepted.
/// 2. Every variant must use named fields. Tuple and unit variants are rejected.
/// 3. A variant with a `source` field (or a field tagged `#[source]`/`#[from]`) must
///    also carry `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[foodpacker_derive::foodpacker_error]
/// pub enum ThemeError {
///     #[error("IO error{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn read() -> Result<String, ThemeError> {
///     std::fs::read_to_string("palette.toml").context("Reading palette")
/// }
/// ```
#[proc_macro_attribute]
pub fn foodpacker_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error::expand(input).into()
}
