//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct and dispatch
//! - `ignored` - White space, commas, BOM and line terminators
//! - `name` - Names
//! - `punctuator` - Punctuators including `...`
//! - `number` - Int and Float literals
//! - `string` - Strings and the shared escape scanner
//! - `block_string` - Triple-quoted block strings
//! - `comment` - `#` comments

mod block_string;
mod comment;
mod core;
mod ignored;
mod name;
mod number;
mod punctuator;
mod string;

pub use core::Lexer;
