// https://stackoverflow.com/a/61417700
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

mod checker;

/// Cache entries and request-side `Cache-Control`.
pub mod cache;

pub use checker::*;
