use crate::error::{OperationError, Result};

use super::{LabelStyle, TextRasterizer};

/// Line advance as a multiple of the font size.
pub const LINE_HEIGHT: f64 = 1.3;

/// One line of a laid-out label.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelLine {
    pub text: String,
    /// Left edge of the text in pixels.
    pub x: f64,
    /// Baseline of the text in pixels from the top.
    pub baseline: f64,
}

/// Pixel size and line placement of a label bitmap.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelLayout {
    pub width: f64,
    pub height: f64,
    pub lines: Vec<LabelLine>,
}

impl LabelLayout {
    /// Lays out `message` with one space of padding on each side.
    ///
    /// The width is the widest measured line plus the border on both sides;
    /// the height is `font_size · lines · LINE_HEIGHT` plus the border on both
    /// sides.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if the font size is not positive
    /// or the border thickness is negative.
    pub fn compute<R>(message: &str, style: &LabelStyle, rasterizer: &R) -> Result<Self>
    where
        R: TextRasterizer + ?Sized,
    {
        if !(style.font_size.is_finite() && style.font_size > 0.0) {
            return Err(OperationError::InvalidInput(format!(
                "font size must be positive, got {}",
                style.font_size
            ))
            .into());
        }
        let border = style.border_thickness;
        if !(border.is_finite() && border >= 0.0) {
            return Err(OperationError::InvalidInput(format!(
                "border thickness must be non-negative, got {border}"
            ))
            .into());
        }

        let padded = format!(" {message} ");
        let mut widest = 0.0_f64;
        let mut lines = Vec::new();
        for (i, text) in padded.split('\n').enumerate() {
            widest = widest.max(rasterizer.measure_line(text, style));
            #[allow(clippy::cast_precision_loss)]
            let row = (i + 1) as f64;
            lines.push(LabelLine {
                text: text.to_owned(),
                x: border,
                baseline: style.font_size * row + border / 2.0,
            });
        }

        #[allow(clippy::cast_precision_loss)]
        let rows = lines.len() as f64;
        Ok(Self {
            width: widest + 2.0 * border,
            height: style.font_size * rows * LINE_HEIGHT + 2.0 * border,
            lines,
        })
    }

    /// Rectangle `(x0, y0, x1, y1)` traced by the border stroke, inset by half its width.
    #[must_use]
    pub fn border_rect(&self, style: &LabelStyle) -> (f64, f64, f64, f64) {
        let half = style.border_thickness / 2.0;
        (half, half, self.width - half, self.height - half)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Monospaced: every character is half the font size wide.
    struct Mono;

    impl TextRasterizer for Mono {
        type Bitmap = ();

        #[allow(clippy::cast_precision_loss)]
        fn measure_line(&self, line: &str, style: &LabelStyle) -> f64 {
            line.chars().count() as f64 * style.font_size * 0.5
        }

        fn rasterize(&mut self, _layout: &LabelLayout, _style: &LabelStyle) -> Self::Bitmap {}
    }

    #[test]
    fn single_line_size() {
        let layout = LabelLayout::compute("Hi", &LabelStyle::default(), &Mono).unwrap();
        assert_relative_eq!(layout.width, 52.0);
        assert_relative_eq!(layout.height, 35.2, epsilon = 1e-9);
        assert_eq!(layout.lines.len(), 1);
        assert_eq!(layout.lines[0].text, " Hi ");
        assert_relative_eq!(layout.lines[0].x, 2.0);
        assert_relative_eq!(layout.lines[0].baseline, 25.0);
    }

    #[test]
    fn multi_line_uses_widest_line() {
        let layout = LabelLayout::compute("ab\nlonger", &LabelStyle::default(), &Mono).unwrap();
        assert_eq!(layout.lines[0].text, " ab");
        assert_eq!(layout.lines[1].text, "longer ");
        assert_relative_eq!(layout.width, 7.0 * 12.0 + 4.0);
        assert_relative_eq!(layout.height, 24.0 * 2.0 * 1.3 + 4.0, epsilon = 1e-9);
        assert_relative_eq!(layout.lines[1].baseline, 49.0);
    }

    #[test]
    fn border_rect_is_inset() {
        let style = LabelStyle::default();
        let layout = LabelLayout::compute("x", &style, &Mono).unwrap();
        let (x0, y0, x1, y1) = layout.border_rect(&style);
        assert_relative_eq!(x0, 1.0);
        assert_relative_eq!(y0, 1.0);
        assert_relative_eq!(x1, layout.width - 1.0);
        assert_relative_eq!(y1, layout.height - 1.0);
    }

    #[test]
    fn invalid_metrics_are_rejected() {
        let zero_font = LabelStyle {
            font_size: 0.0,
            ..LabelStyle::default()
        };
        assert!(LabelLayout::compute("x", &zero_font, &Mono).is_err());

        let negative_border = LabelStyle {
            border_thickness: -1.0,
            ..LabelStyle::default()
        };
        assert!(LabelLayout::compute("x", &negative_border, &Mono).is_err());
    }
}
