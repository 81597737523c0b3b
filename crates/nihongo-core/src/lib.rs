pub mod error;
pub mod language;
pub mod preprocess;
pub mod span;

pub use error::LoadError;
pub use language::{Direction, LanguageProcessor};
pub use preprocess::{DefaultPreprocessor, Preprocessor};
pub use span::{Classification, Span};
