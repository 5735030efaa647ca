//! chatmark-rs: compile legacy chat markup into attributed text.
//!
//! This crate re-exports [`chatmark`] and adds [`compile`], which runs the
//! parser once and produces both output forms.

pub use chatmark::*;

/// Both renderings of one markup string.
#[derive(Clone, Debug, PartialEq)]
pub struct Compiled {
    /// Attributed document with exact colors.
    pub document: Document,
    /// Flat legacy escapes with palette colors.
    pub plain_text: String,
}

impl Compiled {
    /// The document serialized as JSON.
    pub fn json(&self) -> String {
        self.document.to_string()
    }
}

/// Parse `input` with `options` and render it both ways.
pub fn compile(input: &str, options: &MarkupOptions) -> Compiled {
    compile_with(&MarkupParser::from_options(options), input)
}

/// Like [`compile`], with a preconfigured parser.
pub fn compile_with(parser: &MarkupParser, input: &str) -> Compiled {
    let root = parser.parse(input);
    let compiled = Compiled {
        document: render::to_document(&root, false),
        plain_text: render::to_plain_text_with(&root, parser.escape_lead()),
    };
    log::debug!(
        "compiled {} chars into {} top-level runs",
        input.chars().count(),
        compiled.document.extra.len()
    );
    compiled
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_default_options() {
        let compiled = compile("§#FF00AAhello §lworld", &MarkupOptions::default());
        assert_eq!(compiled.plain_text, "§5hello §5§lworld");
        assert_eq!(compiled.document.extra.len(), 2);
        assert_eq!(compiled.document.extra[1].color.as_deref(), Some("#FF00AA"));
        assert!(compiled.document.extra[1].bold);
    }

    #[test]
    fn test_compile_from_json_options() {
        let options = MarkupOptions::from_json(r#"{"escape_lead": "&", "gradients": false}"#)
            .expect("valid options");
        let compiled = compile("&#55FF55ok &<#000000:0>x", &options);
        assert_eq!(compiled.plain_text, "&aok &<#000000:0>x");
    }

    #[test]
    fn test_compiled_json_matches_renderer() {
        let parser = MarkupParser::new();
        let compiled = compile_with(&parser, "plain");
        assert_eq!(compiled.json(), parser.to_json("plain", false));
    }
}
