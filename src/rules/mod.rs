//! Rule implementations for tscat.
//!
//! Each rule is a pure function over loaded catalogs that returns a specific
//! issue type.
//!
//! ## Module Structure
//!
//! - `helpers`: Line lookup and entry iteration shared by all rules
//! - `unfinished`: Entries still waiting for translation
//! - `empty`: Final entries with an empty translation
//! - `placeholder`: `%1`/`%n` markers differing between source and translation
//! - `duplicate`: Repeated (context, source) pairs

pub mod duplicate;
pub mod empty;
pub mod helpers;
pub mod placeholder;
pub mod unfinished;
