use std::ops::Range;

use crate::assets::fonts::LoadedFont;
use crate::foundation::color::Rgb8;
use crate::foundation::error::{CodeshotError, CodeshotResult};
use crate::render::layout::GridMetrics;

/// Opaque RGB brush carried through Parley layouts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct TextBrush {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
}

impl From<Rgb8> for TextBrush {
    fn from(c: Rgb8) -> Self {
        Self {
            r: c.r,
            g: c.g,
            b: c.b,
        }
    }
}

/// Parley contexts with one registered font family.
pub(crate) struct TextEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrush>,
    family: String,
}

impl TextEngine {
    /// Register `font` with fresh Parley contexts.
    pub(crate) fn new(font: &LoadedFont) -> CodeshotResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font.bytes.as_ref().clone()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| CodeshotError::render("no font families registered from font bytes"))?;
        let family = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| CodeshotError::render("registered font family has no name"))?
            .to_string();

        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family,
        })
    }

    /// Lay out a single line of text, coloring each byte range with its brush.
    pub(crate) fn layout_line(
        &mut self,
        text: &str,
        size_px: f32,
        default_brush: TextBrush,
        runs: &[(Range<usize>, TextBrush)],
    ) -> CodeshotResult<parley::Layout<TextBrush>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(CodeshotError::render("font size must be finite and > 0"));
        }

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(self.family.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(default_brush));
        for (range, brush) in runs {
            if range.start < range.end && range.end <= text.len() {
                builder.push(parley::style::StyleProperty::Brush(*brush), range.clone());
            }
        }

        let mut layout: parley::Layout<TextBrush> = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }

    /// Column width and vertical extents at `size_px`, measured on `M`.
    pub(crate) fn grid_metrics(&mut self, size_px: f32) -> CodeshotResult<GridMetrics> {
        let layout = self.layout_line("M", size_px, TextBrush::default(), &[])?;
        let line = layout
            .lines()
            .next()
            .ok_or_else(|| CodeshotError::render("font produced no line metrics"))?;
        let m = line.metrics();
        if !(m.advance > 0.0) {
            return Err(CodeshotError::render("font has no advance for 'M'"));
        }
        Ok(GridMetrics {
            char_w: m.advance,
            ascent: m.ascent,
            descent: m.descent,
        })
    }
}

/// Baseline of the first line of `layout`, or zero for an empty layout.
pub(crate) fn first_baseline(layout: &parley::Layout<TextBrush>) -> f32 {
    layout.lines().next().map_or(0.0, |l| l.metrics().baseline)
}
