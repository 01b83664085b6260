use super::{Border, Color, TextStyle};

/// Presentation of one element, as resolved from a stylesheet.
///
/// Every field is optional so styles can be layered: `merge` lets the
/// later style's set fields win, text flags accumulate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    pub background: Option<Color>,
    pub foreground: Option<Color>,
    pub border: Option<Border>,
    pub text_style: TextStyle,
    pub hidden: Option<bool>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn border(mut self, border: Border) -> Self {
        self.border = Some(border);
        self
    }

    pub fn bold(mut self) -> Self {
        self.text_style.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.text_style.italic = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.text_style.underline = true;
        self
    }

    pub fn dim(mut self) -> Self {
        self.text_style.dim = true;
        self
    }

    pub fn reverse(mut self) -> Self {
        self.text_style.reverse = true;
        self
    }

    /// Do not lay out or paint the element (or its subtree).
    pub fn hidden(mut self) -> Self {
        self.hidden = Some(true);
        self
    }

    /// Lay out and paint the element, overriding an earlier `hidden`.
    pub fn visible(mut self) -> Self {
        self.hidden = Some(false);
        self
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden.unwrap_or(false)
    }

    pub fn has_border(&self) -> bool {
        !matches!(self.border, None | Some(Border::None))
    }

    /// Layer `other` on top of `self`.
    pub fn merge(&self, other: &Style) -> Style {
        Style {
            background: other.background.or(self.background),
            foreground: other.foreground.or(self.foreground),
            border: other.border.or(self.border),
            text_style: self.text_style.union(other.text_style),
            hidden: other.hidden.or(self.hidden),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_later_wins() {
        let base = Style::new()
            .background(Color::rgb(1, 1, 1))
            .foreground(Color::rgb(2, 2, 2))
            .hidden();
        let over = Style::new().background(Color::rgb(9, 9, 9)).visible().bold();

        let merged = base.merge(&over);
        assert_eq!(merged.background, Some(Color::rgb(9, 9, 9)));
        assert_eq!(merged.foreground, Some(Color::rgb(2, 2, 2)));
        assert!(!merged.is_hidden());
        assert!(merged.text_style.bold);
    }

    #[test]
    fn test_border_detection() {
        assert!(!Style::new().has_border());
        assert!(!Style::new().border(Border::None).has_border());
        assert!(Style::new().border(Border::Rounded).has_border());
    }
}
