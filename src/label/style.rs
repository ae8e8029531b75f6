/// An sRGB colour with a fractional alpha channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity in `[0, 1]`.
    pub a: f64,
}

impl Rgba {
    pub const BLACK: Self = Self::new(0, 0, 0, 1.0);
    pub const WHITE: Self = Self::new(255, 255, 255, 1.0);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Same colour with alpha replaced (clamped to `[0, 1]`).
    #[must_use]
    pub fn with_alpha(self, a: f64) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// CSS `rgba(...)` notation.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

/// Font, border and colours of a text label.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelStyle {
    pub font_face: String,
    /// Font size in pixels.
    pub font_size: f64,
    pub bold: bool,
    /// Border line width in pixels.
    pub border_thickness: f64,
    pub border_color: Rgba,
    pub background_color: Rgba,
    pub text_color: Rgba,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            font_face: "Arial".into(),
            font_size: 24.0,
            bold: true,
            border_thickness: 2.0,
            border_color: Rgba::BLACK,
            background_color: Rgba::WHITE.with_alpha(0.3),
            text_color: Rgba::BLACK,
        }
    }
}

impl LabelStyle {
    /// Sets the background opacity.
    #[must_use]
    pub fn with_opacity(mut self, alpha: f64) -> Self {
        self.background_color = self.background_color.with_alpha(alpha);
        self
    }

    /// CSS font shorthand, e.g. `Bold 24px Arial`.
    #[must_use]
    pub fn font(&self) -> String {
        if self.bold {
            format!("Bold {}px {}", self.font_size, self.font_face)
        } else {
            format!("{}px {}", self.font_size, self.font_face)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_background_is_translucent_white() {
        let style = LabelStyle::default();
        assert_eq!(style.background_color, Rgba::new(255, 255, 255, 0.3));
        assert_eq!(style.font(), "Bold 24px Arial");
    }

    #[test]
    fn opacity_is_clamped() {
        let style = LabelStyle::default().with_opacity(1.7);
        assert_eq!(style.background_color.a, 1.0);
        assert_eq!(style.background_color.to_css(), "rgba(255,255,255,1)");
    }

    #[test]
    fn regular_weight_font() {
        let style = LabelStyle {
            bold: false,
            font_size: 12.5,
            font_face: "Helvetica".into(),
            ..LabelStyle::default()
        };
        assert_eq!(style.font(), "12.5px Helvetica");
    }
}
