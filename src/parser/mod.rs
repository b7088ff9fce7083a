pub mod error;
pub mod line_classifier;
pub mod serifu_parser;

pub use error::{ParseError, ParseResult};
pub use line_classifier::{classify_line, LineKind};
pub use serifu_parser::{ParseState, SerifuParser};
