// PDK Manager - core/makefile.rs
//
// Makefile templating: plain substring substitution of the design
// placeholder. Works on strings only; reading and writing is done by the
// app layer.

/// Result of rendering a Makefile template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMakefile {
    pub contents: String,
    /// Number of placeholder occurrences replaced.
    pub replacements: usize,
}

/// Replace every occurrence of `placeholder` in `template` with `design`.
///
/// An empty placeholder leaves the template untouched rather than inserting
/// the design name between every character.
pub fn render(template: &str, placeholder: &str, design: &str) -> RenderedMakefile {
    if placeholder.is_empty() {
        return RenderedMakefile {
            contents: template.to_owned(),
            replacements: 0,
        };
    }
    RenderedMakefile {
        contents: template.replace(placeholder, design),
        replacements: template.matches(placeholder).count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str = "\
DESIGN_CONFIG ?= ./designs/$(PLATFORM)/nandgate/config.mk
include designs/src/nandgate/Makefile.inc
";

    #[test]
    fn test_render_replaces_every_occurrence() {
        let out = render(TEMPLATE, "nandgate", "gcd");
        assert_eq!(out.replacements, 2);
        assert!(!out.contents.contains("nandgate"));
        assert!(out.contents.contains("./designs/$(PLATFORM)/gcd/config.mk"));
        assert!(out.contents.contains("designs/src/gcd/Makefile.inc"));
    }

    #[test]
    fn test_render_without_placeholder_is_identity() {
        let out = render("all:\n\techo hi\n", "nandgate", "gcd");
        assert_eq!(out.replacements, 0);
        assert_eq!(out.contents, "all:\n\techo hi\n");
    }

    #[test]
    fn test_render_empty_placeholder_is_identity() {
        let out = render(TEMPLATE, "", "gcd");
        assert_eq!(out.replacements, 0);
        assert_eq!(out.contents, TEMPLATE);
    }

    #[test]
    fn test_render_design_containing_placeholder() {
        // Substitution is single-pass, so the output may legitimately contain
        // the placeholder again without looping.
        let out = render("x nandgate y", "nandgate", "nandgate2");
        assert_eq!(out.contents, "x nandgate2 y");
        assert_eq!(out.replacements, 1);
    }
}
