//! tscat - Qt Linguist translation catalog toolkit
//!
//! tscat is a CLI tool and library for loading, checking, merging and
//! compiling Qt Linguist `.ts` translation catalogs, and for looking up
//! translated strings at runtime.
//!
//! ## Module Structure
//!
//! - `catalog`: Catalog data model, XML reader/writer, merge and statistics
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `context`: Catalog discovery and parallel loading for one command run
//! - `issues`: Issue type definitions and reporting
//! - `rules`: Catalog checks
//! - `scanner`: Catalog file discovery
//! - `translator`: Runtime lookup and its compiled JSON form

pub mod catalog;
pub mod cli;
pub mod config;
pub mod context;
pub mod issues;
pub mod rules;
pub mod scanner;
pub mod translator;
