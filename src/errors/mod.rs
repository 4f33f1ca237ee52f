//! Error types and error handling for the front end.
//!
//! Both lexical and syntax failures are reported through a single `Error`
//! carrying the offending text and the position it was found at. The first
//! error aborts the whole parse; there is no recovery.

pub mod errors;
