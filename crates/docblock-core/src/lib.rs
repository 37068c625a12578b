//! Doc comment generation for JavaScript-family sources.
//!
//! Given the lines that follow a `/**` trigger, the engine recovers the
//! declaration, infers parameter and return types, and produces an editor
//! snippet with tab stops for every placeholder.
//!
//! - [`extractor`] joins a multi-line declaration.
//! - [`parser`] holds the per-language strategies and their registry.
//! - [`infer`] and [`notation`] guess types from values and names.
//! - [`format`] turns a parse into tag lines.
//! - [`template`] aligns, numbers and composes the final text.
//! - [`engine`] wires the pipeline together around an [`Invocation`].

pub mod engine;
pub mod error;
pub mod extractor;
pub mod format;
pub mod infer;
pub mod model;
pub mod notation;
pub mod parser;
pub mod snippet;
pub mod splitter;
pub mod template;

pub use engine::{is_existing_comment, is_trigger, DocBlockr, Invocation, Output};
pub use error::{EngineError, Result};
pub use extractor::MAX_LOOKAHEAD_LINES;
pub use model::{Argument, Parsed, ParsedFunction, ParsedVariable};
pub use parser::{DeclarationParser, ParserRegistry, ParserSettings};
