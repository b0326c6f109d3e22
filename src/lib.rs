//! codeshot renders source code as a syntax-highlighted bitmap and places it into a photograph.
//!
//! The pipeline is:
//!
//! - Resolve a [`Lexer`] from a language hint or the text itself ([`LexerRegistry`])
//! - Clamp the source to a fixed number of lines ([`normalize`])
//! - Draw tokens, line numbers and highlight bands ([`Rasterizer`])
//! - Warp the canvas through the background's [`ProjectiveMatrix`] and multiply it onto the
//!   photo ([`Compositor`])
//!
//! [`RenderPipeline`] ties the stages together and renders batches in parallel.
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod foundation;

pub mod assets;
pub mod composite;
pub mod normalize;
pub mod pipeline;
pub mod render;
pub mod syntax;
pub mod theme;

pub use crate::foundation::color::Rgb8;
pub use crate::foundation::error::{CodeshotError, CodeshotResult};

pub use crate::assets::{
    BackgroundPool, FontSource, LoadedFont, MatrixCache, SidecarDescriptor, SidecarSource,
};
pub use crate::composite::{Compositor, ProjectiveMatrix};
pub use crate::normalize::{DEFAULT_MAX_LINES, NormalizedText, normalize};
pub use crate::pipeline::{
    PipelineOpts, RenderOutcome, RenderPipeline, RenderRequest, RenderedCanvas,
};
pub use crate::render::{CodeCanvas, Rasterizer};
pub use crate::syntax::{Lexer, LexerRegistry, Token, TokenClass};
pub use crate::theme::{Theme, ThemeVariant};
