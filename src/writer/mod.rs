pub mod script_writer;

pub use script_writer::{format_item, write_script};
