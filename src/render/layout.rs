use crate::theme::Theme;

/// Font measurements the pixel grid is derived from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridMetrics {
    /// Advance of `M`, used as the column width.
    pub char_w: f32,
    /// Distance from the baseline to the top of the tallest glyph.
    pub ascent: f32,
    /// Distance from the baseline to the bottom of the lowest glyph.
    pub descent: f32,
}

impl GridMetrics {
    /// Glyph box height, rounded up to whole pixels.
    pub fn font_h(&self) -> u32 {
        (self.ascent + self.descent).ceil().max(1.0) as u32
    }
}

/// Pixel geometry of a code canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasLayout {
    /// Column width in pixels.
    pub char_w: f32,
    /// Baseline offset from the top of a line.
    pub ascent: f32,
    /// Padding around the canvas.
    pub image_pad: u32,
    /// Height of one line including its padding.
    pub line_h: u32,
    /// Number of line-number columns.
    pub number_cols: u32,
    /// Gutter width: number columns plus padding on both sides.
    pub gutter_w: u32,
    /// Padding between the gutter band and the code.
    pub line_number_pad: u32,
    /// Canvas width.
    pub width: u32,
    /// Canvas height.
    pub height: u32,
}

impl CanvasLayout {
    /// Lay out `line_count` lines whose widest line spans `widest_cols` columns.
    pub fn compute(
        metrics: &GridMetrics,
        theme: &Theme,
        line_count: usize,
        widest_cols: usize,
    ) -> Self {
        let number_cols = theme.line_number_chars.max(digits(line_count));
        let char_w = metrics.char_w.max(0.0);
        let gutter_w = (number_cols as f32 * char_w).ceil() as u32 + 2 * theme.line_number_pad;
        let line_h = metrics.font_h() + theme.line_pad;
        let widest_px = (widest_cols as f32 * char_w).ceil() as u32;

        let mut layout = Self {
            char_w,
            ascent: metrics.ascent,
            image_pad: theme.image_pad,
            line_h,
            number_cols,
            gutter_w,
            line_number_pad: theme.line_number_pad,
            width: 0,
            height: 0,
        };
        layout.width = theme.image_pad + gutter_w + widest_px + theme.image_pad;
        layout.height = layout.line_y(line_count) + theme.image_pad;
        layout
    }

    /// Widen the canvas until `text_w` pixels of shaped code fit after the gutter.
    ///
    /// Grid columns undercount glyphs wider than one cell (full-width or fallback glyphs).
    pub fn fit_text_width(mut self, text_w: f32) -> Self {
        // Summed advances carry float noise; a 1/64 px overhang is not a new pixel.
        let text_px = (text_w - 1.0 / 64.0).max(0.0).ceil() as u32;
        self.width = self.width.max(self.text_x() + text_px + self.image_pad);
        self
    }

    /// Top edge of the 0-based line `i`.
    pub fn line_y(&self, i: usize) -> u32 {
        i as u32 * self.line_h + self.image_pad
    }

    /// Left edge of the code text.
    pub fn text_x(&self) -> u32 {
        self.image_pad + self.gutter_w
    }

    /// Width of the gutter band, which ends where the separator is drawn.
    pub fn gutter_band_w(&self) -> u32 {
        self.image_pad + self.gutter_w - self.line_number_pad
    }

    /// Left edge of highlight bands, just right of the separator.
    pub fn highlight_x(&self) -> u32 {
        self.gutter_band_w() + 1
    }

    /// Left edge of a right-aligned line number with `n_digits` digits.
    pub fn number_x(&self, n_digits: u32) -> f32 {
        self.image_pad as f32 + self.number_cols.saturating_sub(n_digits) as f32 * self.char_w
    }
}

/// Decimal digits in `n` (at least one).
pub fn digits(n: usize) -> u32 {
    n.checked_ilog10().map_or(1, |d| d + 1)
}

/// Expand tabs to 4-column stops, given the column the text starts at.
pub fn expand_tabs(text: &str, start_col: usize, out: &mut String) -> usize {
    const TAB: usize = 4;
    let mut col = start_col;
    for ch in text.chars() {
        match ch {
            '\t' => {
                let n = TAB - col % TAB;
                out.extend(std::iter::repeat_n(' ', n));
                col += n;
            }
            '\r' | '\n' => {}
            _ => {
                out.push(ch);
                col += 1;
            }
        }
    }
    col
}

#[cfg(test)]
#[path = "../../tests/unit/render/layout.rs"]
mod tests;
