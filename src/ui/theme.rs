//! Visual theme and styling.

use console::Style;

use super::Severity;

/// Severity-to-style table used when tagging diagnostics.
///
/// Built once by the driver and handed to the reporter; nothing in the crate
/// reaches for ambient color state.
#[derive(Debug, Clone)]
pub struct SeverityStyles {
    /// Style for PASS tags (green).
    pub pass: Style,
    /// Style for FAIL tags (red).
    pub fail: Style,
    /// Style for WARN tags (yellow).
    pub warn: Style,
    /// Style for INFO tags (blue).
    pub info: Style,
}

impl Default for SeverityStyles {
    fn default() -> Self {
        Self::new()
    }
}

impl SeverityStyles {
    /// Create the colored table.
    pub fn new() -> Self {
        Self {
            pass: Style::new().green(),
            fail: Style::new().red(),
            warn: Style::new().yellow(),
            info: Style::new().blue(),
        }
    }

    /// Create a table without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            pass: Style::new(),
            fail: Style::new(),
            warn: Style::new(),
            info: Style::new(),
        }
    }

    /// Pick the table matching the current terminal.
    pub fn detect(no_color: bool) -> Self {
        if !no_color && should_use_colors() {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Look up the style for a severity.
    pub fn style(&self, severity: Severity) -> &Style {
        match severity {
            Severity::Pass => &self.pass,
            Severity::Fail => &self.fail,
            Severity::Warn => &self.warn,
            Severity::Info => &self.info,
        }
    }

    /// Format a message as `[TAG] message`, coloring only the tag.
    pub fn format(&self, severity: Severity, msg: &str) -> String {
        format!("[{}] {}", self.style(severity).apply_to(severity), msg)
    }
}

/// Check if colors should be enabled for diagnostics on stderr.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stderr().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_formats_warn_tag() {
        let styles = SeverityStyles::plain();
        assert_eq!(
            styles.format(Severity::Warn, "Missing config file for kubelet"),
            "[WARN] Missing config file for kubelet"
        );
    }

    #[test]
    fn plain_formats_every_severity() {
        let styles = SeverityStyles::plain();
        assert!(styles.format(Severity::Pass, "x").starts_with("[PASS]"));
        assert!(styles.format(Severity::Fail, "x").starts_with("[FAIL]"));
        assert!(styles.format(Severity::Info, "x").starts_with("[INFO]"));
    }

    #[test]
    fn colored_format_keeps_message_text() {
        let styles = SeverityStyles::new();
        let msg = styles.format(Severity::Info, "checking");
        assert!(msg.contains("INFO"));
        assert!(msg.ends_with("checking"));
    }

    #[test]
    fn style_lookup_applies_severity_color() {
        let styles = SeverityStyles {
            warn: Style::new().yellow().force_styling(true),
            ..SeverityStyles::plain()
        };
        let warn = styles.style(Severity::Warn).apply_to("WARN").to_string();
        assert!(warn.starts_with("\u{1b}[33m"));
        assert!(warn.contains("WARN"));
        assert_eq!(
            styles.style(Severity::Fail).apply_to("FAIL").to_string(),
            "FAIL"
        );

        let plain = SeverityStyles::plain();
        assert_eq!(plain.style(Severity::Pass).apply_to("PASS").to_string(), "PASS");
    }

    #[test]
    fn detect_with_no_color_is_plain() {
        let styles = SeverityStyles::detect(true);
        assert_eq!(styles.format(Severity::Fail, "x"), "[FAIL] x");
    }
}
