//! altscan - find `<Image>` elements without an `alt` attribute
//!
//! altscan is a CLI tool and library that walks a JSX/TSX source tree and
//! reports every `<Image ...>` element whose props do not include `alt=`.
//! Matching is a tolerant regex scan, not a parse.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, dispatch, exit status)
//! - `config`: Scan settings and fixed constants
//! - `finding`: The reported violation type
//! - `report`: Text and JSON Lines finding sinks
//! - `scanner`: Directory traversal and per-file matching

pub mod cli;
pub mod config;
pub mod finding;
pub mod report;
pub mod scanner;
