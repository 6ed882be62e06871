//! Edge case tests for gqlc-lex
//!
//! Table tests for every token category, checked against exact kinds,
//! values and positions.
