mod error;
pub use error::LogError;

mod source;
pub use source::LogSource;

mod target;
pub use target::LogTarget;

mod reader;
pub use reader::{LogReader, render};
