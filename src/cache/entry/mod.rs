mod common;
mod entry;

#[allow(unused_imports)]
pub use {common::*, entry::*};
