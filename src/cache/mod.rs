mod control;
mod entry;
mod error;
mod hooks;
mod request;

#[allow(unused_imports)]
pub use {control::*, entry::*, error::*, hooks::*, request::*};
