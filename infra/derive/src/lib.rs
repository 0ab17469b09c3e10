#![allow(unreachable_pub)]

//! # Macros
//!
//! Procedural macros used across the Doran workspace.
//!
//! Consumers must also depend on `thiserror`, since the expansion derives
//! `::thiserror::Error`.

mod error;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Turns a plain enum into a workspace error type.
///
/// # Generated Items
///
/// * `#[derive(Debug, thiserror::Error)]` unless already derived.
/// * `<ErrorName>Ext` trait with `.context(...)` for `Result<T, ErrorName>` and,
///   for every variant carrying a source, for `Result<T, SourceError>` too.
/// * `From<SourceError>` for every variant carrying a source.
/// * `From<&'static str>` and `From<String>` when an `Internal` variant exists.
/// * A private `format_context` helper for use inside `#[error(...)]` strings.
///
/// # Requirements
///
/// * Applied to an enum whose variants all have named fields.
/// * A `context` field, when present, is `Option<Cow<'static, str>>`.
/// * A variant with a source (`source` field, or `#[source]`/`#[from]`) also has a `context` field.
///
/// # Example
///
/// ```rust,ignore
/// use doran_derive::doran_error;
/// use std::borrow::Cow;
///
/// #[doran_error]
/// pub enum MountError {
///     #[error("Mount point '{id}' not found{}", format_context(.context))]
///     NotFound { id: Cow<'static, str>, context: Option<Cow<'static, str>> },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
/// ```
#[proc_macro_attribute]
pub fn doran_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error::expand(input).into()
}
