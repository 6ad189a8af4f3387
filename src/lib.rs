//! A lightweight wildcard pattern matching library.
//!
//! This crate provides wildcard matching with `*` (zero or more characters)
//! and `?` (exactly one character) over strings, byte slices, UTF-16 code
//! unit slices, and character slices, using a backtracking scan with a single
//! retained checkpoint and no allocation.
//!
//! # Features
//!
//! - **Simple API**: one free function [`matches`] plus a reusable [`Pattern`] handle
//! - **Infallible**: every sequence is a valid pattern, construction cannot fail
//! - **UTF-8 aware**: on strings the `?` wildcard matches exactly one character
//! - **Sequence generic**: narrow and wide texts run through the same matcher via the [`Symbols`] trait
//! - **No allocation**: matching keeps a handful of cursors and nothing else
//!
//! # Pattern Syntax
//!
//! - `*` matches zero or more characters
//! - `?` matches exactly one character
//! - Any other character matches itself
//! - There is no escape syntax; `*` and `?` always act as wildcards
//!
//! # Examples
//!
//! ```
//! use wildscan::{Pattern, matches};
//!
//! assert!(matches("*.txt", "hello.txt"));
//! assert!(!matches("*.txt", "hello.rs"));
//!
//! let pattern = Pattern::new("test?.log");
//! assert!(pattern.matches("test1.log"));
//! assert!(pattern.matches("test2.log"));
//! assert!(!pattern.matches("test.log"));
//! assert!(!pattern.matches("test12.log"));
//! ```
//!
//! # UTF-8 Handling
//!
//! On strings the `?` wildcard matches exactly one character, not one byte:
//!
//! ```
//! use wildscan::matches;
//!
//! assert!(matches("???", "abc"));
//! assert!(matches("???", "🦀🎉🌟")); // Three emoji = three characters
//! assert!(!matches("???", "ab"));
//! ```
//!
//! # Beyond Strings
//!
//! Matching is defined over any [`Symbols`] sequence, so byte slices and
//! UTF-16 code unit slices work out of the box:
//!
//! ```
//! use wildscan::matches;
//!
//! assert!(matches(&b"GET /api/*"[..], &b"GET /api/users"[..]));
//!
//! let pattern: Vec<u16> = "v?".encode_utf16().collect();
//! let text: Vec<u16> = "v2".encode_utf16().collect();
//! assert!(matches(&pattern, &text));
//! ```

mod pattern;
mod symbol;

pub use pattern::*;
pub use symbol::*;
