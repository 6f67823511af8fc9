//! Visual theme and styling.

use console::Style;

/// Gangway's visual theme.
#[derive(Debug, Clone)]
pub struct GangwayTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for informational elements (cyan).
    pub info: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for phase headers (cyan bold).
    pub header: Style,
    /// Style for remediation hints (cyan dim).
    pub hint: Style,
    /// Style for commands shown in output (dim italic).
    pub command: Style,
}

impl Default for GangwayTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl GangwayTheme {
    /// Create the default Gangway theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            info: Style::new().cyan(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().cyan(),
            hint: Style::new().cyan().dim(),
            command: Style::new().dim().italic(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            info: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
            hint: Style::new(),
            command: Style::new(),
        }
    }
}

/// Whether colored output should be used.
///
/// Honors the `NO_COLOR` convention and requires a terminal on stdout.
pub fn should_use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    console::Term::stdout().is_term()
}
