use std::collections::BTreeSet;
use std::ops::Range;

use crate::assets::fonts::LoadedFont;
use crate::foundation::color::Rgb8;
use crate::foundation::error::{CodeshotError, CodeshotResult};
use crate::render::layout::{CanvasLayout, digits, expand_tabs};
use crate::render::text::{TextBrush, TextEngine, first_baseline};
use crate::syntax::{Token, TokenClass};
use crate::theme::Theme;

/// A rendered code image: tightly packed row-major RGB8.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeCanvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// `width * height * 3` bytes.
    pub rgb8: Vec<u8>,
}

impl CodeCanvas {
    /// Wrap an `image` buffer.
    pub fn from_rgb_image(img: image::RgbImage) -> Self {
        Self {
            width: img.width(),
            height: img.height(),
            rgb8: img.into_raw(),
        }
    }

    /// Convert to an `image` buffer.
    pub fn to_rgb_image(&self) -> CodeshotResult<image::RgbImage> {
        image::RgbImage::from_raw(self.width, self.height, self.rgb8.clone()).ok_or_else(|| {
            CodeshotError::render(format!(
                "canvas buffer does not match {}x{}",
                self.width, self.height
            ))
        })
    }

    /// Color at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 3;
        Some(Rgb8::new(self.rgb8[i], self.rgb8[i + 1], self.rgb8[i + 2]))
    }
}

/// One display line after tab expansion, with colored byte ranges.
struct CodeLine {
    text: String,
    cols: usize,
    runs: Vec<(Range<usize>, TextBrush)>,
}

/// Split a token stream into display lines.
fn split_lines(tokens: &[Token], theme: &Theme) -> Vec<CodeLine> {
    let mut lines = vec![CodeLine {
        text: String::new(),
        cols: 0,
        runs: Vec::new(),
    }];

    for token in tokens {
        let brush = TextBrush::from(theme.color_for(token.class));
        for (i, piece) in token.text.split('\n').enumerate() {
            if i > 0 {
                lines.push(CodeLine {
                    text: String::new(),
                    cols: 0,
                    runs: Vec::new(),
                });
            }
            let Some(line) = lines.last_mut() else {
                continue;
            };
            let start = line.text.len();
            line.cols = expand_tabs(piece, line.cols, &mut line.text);
            if line.text.len() > start && token.class != TokenClass::Whitespace {
                line.runs.push((start..line.text.len(), brush));
            }
        }
    }

    lines
}

/// Draws token streams onto code canvases.
///
/// Holds the Parley contexts and a reusable `vello_cpu` render context, so one rasterizer
/// should be kept per worker thread.
pub struct Rasterizer {
    engine: TextEngine,
    font: vello_cpu::peniko::FontData,
    ctx: Option<vello_cpu::RenderContext>,
}

impl std::fmt::Debug for Rasterizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rasterizer").finish_non_exhaustive()
    }
}

impl Rasterizer {
    /// Prepare a rasterizer drawing with `font`.
    pub fn new(font: &LoadedFont) -> CodeshotResult<Self> {
        let engine = TextEngine::new(font)?;
        let data = vello_cpu::peniko::FontData::new(
            vello_cpu::peniko::Blob::from(font.bytes.as_ref().clone()),
            font.index,
        );
        Ok(Self {
            engine,
            font: data,
            ctx: None,
        })
    }

    /// Render `line_count` lines of `tokens` with line numbers and highlight bands.
    ///
    /// `highlighted` holds 1-based line numbers; numbers outside `1..=line_count` are ignored.
    /// Tokens past the last line are not drawn.
    pub fn rasterize(
        &mut self,
        tokens: &[Token],
        line_count: usize,
        theme: &Theme,
        highlighted: &BTreeSet<usize>,
    ) -> CodeshotResult<CodeCanvas> {
        let metrics = self.engine.grid_metrics(theme.font_size)?;
        let lines = split_lines(tokens, theme);
        let widest = lines.iter().take(line_count).map(|l| l.cols).max().unwrap_or(0);

        let default_brush = TextBrush::from(theme.foreground);
        let mut code = Vec::with_capacity(line_count.min(lines.len()));
        for line in lines.iter().take(line_count) {
            if line.text.trim().is_empty() {
                code.push(None);
                continue;
            }
            let text = self
                .engine
                .layout_line(&line.text, theme.font_size, default_brush, &line.runs)?;
            code.push(Some(text));
        }
        let text_w = code.iter().flatten().map(|l| l.width()).fold(0.0f32, f32::max);
        let layout =
            CanvasLayout::compute(&metrics, theme, line_count, widest).fit_text_width(text_w);

        let (w, h) = (layout.width, layout.height);
        let (Ok(w16), Ok(h16)) = (u16::try_from(w), u16::try_from(h)) else {
            return Err(CodeshotError::render(format!(
                "canvas {w}x{h} exceeds the raster limit of {}",
                u16::MAX
            )));
        };
        if w16 == 0 || h16 == 0 {
            return Err(CodeshotError::render("canvas has zero area"));
        }

        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == w16 && ctx.height() == h16 => ctx,
            _ => vello_cpu::RenderContext::new(w16, h16),
        };
        ctx.reset();
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);

        let (wf, hf) = (f64::from(w), f64::from(h));
        fill_rect(&mut ctx, theme.background, 0.0, 0.0, wf, hf);

        let band = f64::from(layout.gutter_band_w());
        fill_rect(&mut ctx, theme.line_number_bg, 0.0, 0.0, band, hf);
        if theme.line_number_separator {
            fill_rect(&mut ctx, theme.line_number_fg, band, 0.0, band + 1.0, hf);
        }

        let hl_x = f64::from(layout.highlight_x());
        for &n in highlighted.iter().filter(|&&n| (1..=line_count).contains(&n)) {
            let y = f64::from(layout.line_y(n - 1));
            fill_rect(&mut ctx, theme.highlight, hl_x, y, wf, y + f64::from(layout.line_h));
        }

        let number_brush = TextBrush::from(theme.line_number_fg);
        for i in 0..line_count {
            let label = (i + 1).to_string();
            let text = self
                .engine
                .layout_line(&label, theme.font_size, number_brush, &[])?;
            let x = layout.number_x(digits(i + 1));
            draw_layout(&mut ctx, &self.font, &text, x, layout.line_y(i), layout.ascent);
        }

        let text_x = layout.text_x() as f32;
        for (i, text) in code.iter().enumerate() {
            if let Some(text) = text {
                draw_layout(&mut ctx, &self.font, text, text_x, layout.line_y(i), layout.ascent);
            }
        }

        ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(w16, h16);
        ctx.render_to_pixmap(&mut pixmap);
        self.ctx = Some(ctx);

        // Every pixel is covered by the opaque background, so premultiplied RGBA is plain RGBA.
        let rgba = pixmap.data_as_u8_slice();
        let mut rgb8 = Vec::with_capacity(rgba.len() / 4 * 3);
        for px in rgba.chunks_exact(4) {
            rgb8.extend_from_slice(&px[..3]);
        }

        tracing::debug!(width = w, height = h, lines = line_count, "code canvas rasterized");
        Ok(CodeCanvas {
            width: w,
            height: h,
            rgb8,
        })
    }
}

fn fill_rect(ctx: &mut vello_cpu::RenderContext, c: Rgb8, x0: f64, y0: f64, x1: f64, y1: f64) {
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, 255));
    ctx.fill_rect(&vello_cpu::kurbo::Rect::new(x0, y0, x1, y1));
}

/// Draw a single-line layout with its baseline `ascent` below `top`.
fn draw_layout(
    ctx: &mut vello_cpu::RenderContext,
    font: &vello_cpu::peniko::FontData,
    layout: &parley::Layout<TextBrush>,
    x: f32,
    top: u32,
    ascent: f32,
) {
    let dy = top as f32 + ascent - first_baseline(layout);
    ctx.set_transform(vello_cpu::kurbo::Affine::translate((
        f64::from(x),
        f64::from(dy),
    )));
    for line in layout.lines() {
        for item in line.items() {
            let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                continue;
            };
            let brush = run.style().brush;
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                brush.r, brush.g, brush.b, 255,
            ));
            let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                id: g.id,
                x: g.x,
                y: g.y,
            });
            ctx.glyph_run(font)
                .font_size(run.run().font_size())
                .fill_glyphs(glyphs);
        }
    }
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
