//! Rendering options.

/// Options for document export.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Document title heading
    pub title: String,

    /// Prefix section headings with their 1-based number
    pub numbered_sections: bool,

    /// Font used for monospace runs
    pub monospace_font: String,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Enable or disable numbered section headings.
    pub fn with_numbered_sections(mut self, numbered: bool) -> Self {
        self.numbered_sections = numbered;
        self
    }

    /// Set the monospace font name.
    pub fn with_monospace_font(mut self, font: impl Into<String>) -> Self {
        self.monospace_font = font.into();
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: "ERDF Application".to_string(),
            numbered_sections: true,
            monospace_font: "Courier New".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = RenderOptions::default();
        assert_eq!(options.title, "ERDF Application");
        assert!(options.numbered_sections);
    }

    #[test]
    fn test_builder() {
        let options = RenderOptions::new()
            .with_title("Draft")
            .with_numbered_sections(false);
        assert_eq!(options.title, "Draft");
        assert!(!options.numbered_sections);
    }
}
