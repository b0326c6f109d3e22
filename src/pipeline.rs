//! End-to-end rendering: resolve a lexer, normalize, rasterize, composite.

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::Arc;

use rayon::prelude::*;

use crate::assets::fonts::{FontSource, LoadedFont};
use crate::assets::matrix_cache::MatrixCache;
use crate::composite::compositor::Compositor;
use crate::composite::homography::ProjectiveMatrix;
use crate::foundation::error::{CodeshotError, CodeshotResult};
use crate::normalize::{DEFAULT_MAX_LINES, NormalizedText, normalize};
use crate::render::raster::{CodeCanvas, Rasterizer};
use crate::syntax::LexerRegistry;
use crate::theme::{Theme, ThemeVariant};

/// Pipeline-wide settings.
#[derive(Clone, Debug)]
pub struct PipelineOpts {
    /// Lines every canvas shows; longer sources are truncated, shorter ones padded.
    pub max_lines: usize,
    /// Theme used for [`ThemeVariant::Light`].
    pub light: Theme,
    /// Theme used for [`ThemeVariant::Dark`].
    pub dark: Theme,
    /// Worker threads for [`RenderPipeline::render_batch`]; `None` lets rayon decide.
    pub threads: Option<usize>,
}

impl Default for PipelineOpts {
    fn default() -> Self {
        Self {
            max_lines: DEFAULT_MAX_LINES,
            light: Theme::light(),
            dark: Theme::dark(),
            threads: None,
        }
    }
}

impl PipelineOpts {
    /// The theme selected by `variant`.
    pub fn theme(&self, variant: ThemeVariant) -> &Theme {
        match variant {
            ThemeVariant::Light => &self.light,
            ThemeVariant::Dark => &self.dark,
        }
    }
}

/// One snippet to render onto one background.
#[derive(Clone, Debug, Default)]
pub struct RenderRequest {
    /// Source text.
    pub source: String,
    /// Optional language hint (id, name or alias).
    pub language: Option<String>,
    /// Background photograph.
    pub background: PathBuf,
    /// Light or dark theme.
    pub variant: ThemeVariant,
    /// 1-based line numbers to draw a highlight band behind.
    pub highlighted_lines: BTreeSet<usize>,
    /// Matrix overriding the background's sidecar.
    pub matrix: Option<ProjectiveMatrix>,
    /// Where to write the composited image.
    pub output: PathBuf,
}

/// Result of rendering a request up to the code canvas.
#[derive(Clone, Debug)]
pub struct RenderedCanvas {
    /// The rasterized code.
    pub canvas: CodeCanvas,
    /// Id of the lexer that tokenized the source.
    pub lexer_id: &'static str,
    /// The normalized source that was drawn.
    pub text: NormalizedText,
}

/// Summary of a completed render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOutcome {
    /// Path of the written image.
    pub output: PathBuf,
    /// Id of the lexer that tokenized the source.
    pub lexer_id: &'static str,
    /// Code canvas width before warping.
    pub width: u32,
    /// Code canvas height before warping.
    pub height: u32,
    /// Whether the source had more lines than the canvas shows.
    pub truncated: bool,
}

/// Shared rendering state: lexers, the matrix cache and the font.
///
/// The pipeline itself is immutable and `Sync`; each call draws with its own [`Rasterizer`].
#[derive(Debug)]
pub struct RenderPipeline {
    registry: Arc<LexerRegistry>,
    compositor: Compositor,
    font: LoadedFont,
    opts: PipelineOpts,
}

impl RenderPipeline {
    /// Built-in lexers, a fresh matrix cache and the light theme's font from the system.
    pub fn new(opts: PipelineOpts) -> CodeshotResult<Self> {
        let font = FontSource::system().resolve(&opts.light)?;
        tracing::info!(family = %font.family, "font resolved");
        Ok(Self::with_parts(
            Arc::new(LexerRegistry::builtin()),
            Arc::new(MatrixCache::new()),
            font,
            opts,
        ))
    }

    /// Assemble a pipeline from explicit parts.
    pub fn with_parts(
        registry: Arc<LexerRegistry>,
        cache: Arc<MatrixCache>,
        font: LoadedFont,
        opts: PipelineOpts,
    ) -> Self {
        Self {
            registry,
            compositor: Compositor::new(cache),
            font,
            opts,
        }
    }

    /// Pipeline settings.
    pub fn opts(&self) -> &PipelineOpts {
        &self.opts
    }

    /// The matrix cache shared by every render.
    pub fn cache(&self) -> &Arc<MatrixCache> {
        self.compositor.cache()
    }

    /// Sorted ids of every supported language.
    pub fn languages(&self) -> &[String] {
        self.registry.list_supported_languages()
    }

    /// A rasterizer drawing with the pipeline's font.
    pub fn rasterizer(&self) -> CodeshotResult<Rasterizer> {
        Rasterizer::new(&self.font)
    }

    /// Tokenize, normalize and rasterize `req` without touching the background.
    #[tracing::instrument(level = "debug", skip_all, fields(lang = ?req.language))]
    pub fn render_canvas(
        &self,
        rasterizer: &mut Rasterizer,
        req: &RenderRequest,
    ) -> CodeshotResult<RenderedCanvas> {
        let lexer = self.registry.resolve(req.language.as_deref(), &req.source)?;
        let text = normalize(&req.source, self.opts.max_lines);
        if text.truncated {
            tracing::debug!(
                original = text.original_line_count,
                shown = text.line_count(),
                "source truncated"
            );
        }

        let tokens = lexer.tokenize(&text.as_text());
        let theme = self.opts.theme(req.variant);
        let canvas =
            rasterizer.rasterize(&tokens, text.line_count(), theme, &req.highlighted_lines)?;

        Ok(RenderedCanvas {
            canvas,
            lexer_id: lexer.id(),
            text,
        })
    }

    /// Run the full chain with a caller-provided rasterizer.
    #[tracing::instrument(level = "debug", skip_all, fields(background = %req.background.display(), output = %req.output.display()))]
    pub fn render_with(
        &self,
        rasterizer: &mut Rasterizer,
        req: &RenderRequest,
    ) -> CodeshotResult<RenderOutcome> {
        let rendered = self.render_canvas(rasterizer, req)?;
        self.compositor.composite(
            &rendered.canvas,
            &req.background,
            req.matrix.as_ref(),
            &req.output,
        )?;
        Ok(RenderOutcome {
            output: req.output.clone(),
            lexer_id: rendered.lexer_id,
            width: rendered.canvas.width,
            height: rendered.canvas.height,
            truncated: rendered.text.truncated,
        })
    }

    /// Run the full chain for one request.
    pub fn render(&self, req: &RenderRequest) -> CodeshotResult<RenderOutcome> {
        let mut rasterizer = self.rasterizer()?;
        self.render_with(&mut rasterizer, req)
    }

    /// Render independent requests in parallel, one rasterizer per worker.
    ///
    /// Results are returned in input order. `threads` overrides [`PipelineOpts::threads`].
    pub fn render_batch(
        &self,
        requests: &[RenderRequest],
        threads: Option<usize>,
    ) -> CodeshotResult<Vec<CodeshotResult<RenderOutcome>>> {
        let pool = build_thread_pool(threads.or(self.opts.threads))?;
        let results = pool.install(|| {
            requests
                .par_iter()
                .map_init(
                    || self.rasterizer(),
                    |worker, req| -> CodeshotResult<RenderOutcome> {
                        match worker {
                            Ok(r) => self.render_with(r, req),
                            Err(e) => Err(CodeshotError::render(format!(
                                "worker rasterizer unavailable: {e}"
                            ))),
                        }
                    },
                )
                .collect::<Vec<_>>()
        });

        let failed = results.iter().filter(|r| r.is_err()).count();
        tracing::info!(total = results.len(), failed, "batch rendered");
        Ok(results)
    }
}

fn build_thread_pool(threads: Option<usize>) -> CodeshotResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(CodeshotError::configuration(
            "render threads must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| CodeshotError::render(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
