//! Class names placed on select elements, and a stylesheet for them.

use termdom::{Color, Style, Stylesheet};

pub const CONTAINER: &str = "container";
pub const VALUE: &str = "value";
pub const PLACEHOLDER: &str = "placeholder";
pub const OPTION_BADGE: &str = "option-badge";
pub const REMOVE_BTN: &str = "remove-btn";
pub const CLEAR_BTN: &str = "clear-btn";
pub const DIVIDER: &str = "divider";
pub const CARET: &str = "caret";
pub const OPTIONS: &str = "options";
pub const SHOW: &str = "show";
pub const OPTION: &str = "option";
pub const SELECTED: &str = "selected";
pub const HIGHLIGHTED: &str = "highlighted";

/// The look the demo ships with. The option list is hidden unless it also
/// carries [`SHOW`].
pub fn default_stylesheet() -> Stylesheet {
    let surface = Color::oklch(0.25, 0.02, 260.0);
    let raised = Color::oklch(0.32, 0.03, 260.0);
    let text = Color::oklch(0.92, 0.01, 260.0);
    let muted = Color::oklch(0.6, 0.02, 260.0);
    let accent = Color::oklch(0.7, 0.15, 250.0);

    Stylesheet::new()
        .rule(".container", Style::new().background(surface).foreground(text))
        .rule(".placeholder", Style::new().foreground(muted).italic())
        .rule(".option-badge", Style::new().background(raised))
        .rule(".remove-btn", Style::new().foreground(muted))
        .rule(".clear-btn", Style::new().foreground(muted))
        .rule(".divider", Style::new().foreground(muted))
        .rule(".caret", Style::new().foreground(accent))
        .rule(".options", Style::new().background(raised).hidden())
        .rule(".options.show", Style::new().visible())
        .rule(".option.selected", Style::new().foreground(accent).bold())
        .rule(".option.highlighted", Style::new().reverse())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classes(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_options_hidden_until_shown() {
        let sheet = default_stylesheet();
        assert!(sheet.resolve(&classes(&[OPTIONS])).is_hidden());
        assert!(!sheet.resolve(&classes(&[OPTIONS, SHOW])).is_hidden());
    }

    #[test]
    fn test_highlighted_selected_option() {
        let sheet = default_stylesheet();
        let style = sheet.resolve(&classes(&[OPTION, SELECTED, HIGHLIGHTED]));
        assert!(style.text_style.bold);
        assert!(style.text_style.reverse);
    }
}
