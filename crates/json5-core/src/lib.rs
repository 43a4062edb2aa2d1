//! # json5-core
//!
//! A data-interchange value model with a grammar-configurable parser and
//! stringifier. Strict JSON (RFC 8259 / ECMA-404) and the permissive
//! JSON5 dialect are the *same* recursive-descent algorithm under
//! different [`Syntax`] configurations — every grammar extension
//! (comments, trailing commas, unquoted keys, extra number and string
//! literal forms) is an independent toggle.
//!
//! ## Quick start
//!
//! ```rust
//! use json5_core::{parse, parse_json5, stringify};
//!
//! // Strict JSON
//! let v = parse(r#"{"b":1,"a":2}"#).unwrap();
//! assert_eq!(v.at("a").as_integer().unwrap(), 2);
//! // Objects serialize in key-sorted order, never insertion order.
//! assert_eq!(stringify(&v), r#"{"a":2,"b":1}"#);
//!
//! // JSON5: comments, unquoted keys, trailing commas
//! let v = parse_json5("{ foo: [1, 2, /*two*/], }").unwrap();
//! assert_eq!(v.at("foo").len(), 2);
//! ```
//!
//! ## Modules
//!
//! - [`value`] — the tagged [`Value`] tree, predicates, casts, indexing
//! - [`convert`] — strict/lenient extraction to native types
//! - [`parser`] — the grammar-configurable parser engine
//! - [`stringify`] — the stringifier engine
//! - [`config`] — [`Syntax`] (parse) and [`Style`] (output) toggles
//! - [`source`] — the byte-source collaborator the parser reads
//! - [`error`] — [`Json5Error`] taxonomy

pub mod config;
pub mod convert;
pub mod error;
pub mod parser;
pub mod source;
pub mod stringify;
pub mod value;

pub use config::{Indent, Style, Syntax};
pub use convert::FromValue;
pub use error::{Json5Error, Result};
pub use parser::{parse, parse_json5, Parser};
pub use source::{ByteSource, SliceSource};
pub use stringify::{stringify, stringify_json5, stringify_with};
pub use value::{array, object, Object, Value, ValueIndex};
