//! Markdown-to-plain-text normalization for model output.
//!
//! The generative endpoint answers in markdown regardless of instruction.
//! Persisted analyses and suggested steps are stored as readable prose, so
//! both outputs pass through this normalizer before being returned.

use once_cell::sync::Lazy;
use regex::Regex;

static CODE_FENCE_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\s*```[^\n]*\n?").unwrap());
static ATX_HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\s{0,3}#{1,6}\s+").unwrap());
static BLOCKQUOTE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\s*>\s?").unwrap());
static HORIZONTAL_RULE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^\s*(?:(?:-\s*){3,}|(?:\*\s*){3,}|(?:_\s*){3,})$").unwrap()
});
static UNORDERED_BULLET: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^(\s*)[-*+]\s+").unwrap());
static ORDERED_BULLET: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^(\s*)\d+[.)]\s+").unwrap());
static IMAGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"!\[([^\]]*)\]\([^)]*\)").unwrap());
static LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]+)\]\([^)]*\)").unwrap());
static BOLD_ASTERISK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*([^*]+)\*\*").unwrap());
static BOLD_UNDERSCORE: Lazy<Regex> = Lazy::new(|| Regex::new(r"__([^_]+)__").unwrap());
static ITALIC_ASTERISK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*([^*\n]+)\*").unwrap());
static ITALIC_UNDERSCORE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b_([^_\n]+)_\b").unwrap());
static INLINE_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`\n]+)`").unwrap());
static EXTRA_BLANK_LINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

/// Strips markdown syntax down to readable prose and trims the result.
/// Runs the strip passes to a fixpoint, so the function is idempotent:
/// already-normalized text comes back unchanged.
pub fn to_plain_text(text: &str) -> String {
    let mut current = strip_once(text);
    for _ in 0..3 {
        let next = strip_once(&current);
        if next == current {
            break;
        }
        current = next;
    }
    current
}

fn strip_once(text: &str) -> String {
    let text = CODE_FENCE_LINE.replace_all(text, "");
    let text = HORIZONTAL_RULE.replace_all(&text, "");
    let text = ATX_HEADER.replace_all(&text, "");
    let text = BLOCKQUOTE.replace_all(&text, "");
    let text = UNORDERED_BULLET.replace_all(&text, "$1");
    let text = ORDERED_BULLET.replace_all(&text, "$1");
    let text = IMAGE.replace_all(&text, "$1");
    let text = LINK.replace_all(&text, "$1");
    let text = BOLD_ASTERISK.replace_all(&text, "$1");
    let text = BOLD_UNDERSCORE.replace_all(&text, "$1");
    let text = ITALIC_ASTERISK.replace_all(&text, "$1");
    let text = ITALIC_UNDERSCORE.replace_all(&text, "$1");
    let text = INLINE_CODE.replace_all(&text, "$1");
    let text = EXTRA_BLANK_LINES.replace_all(&text, "\n\n");
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_headers() {
        assert_eq!(
            to_plain_text("# Resumen Ejecutivo\n\nEl proyecto es viable."),
            "Resumen Ejecutivo\n\nEl proyecto es viable."
        );
        assert_eq!(to_plain_text("### Detalles"), "Detalles");
    }

    #[test]
    fn test_strips_emphasis() {
        assert_eq!(to_plain_text("El **alcance** es *amplio*."), "El alcance es amplio.");
        assert_eq!(to_plain_text("El __alcance__ es _amplio_."), "El alcance es amplio.");
    }

    #[test]
    fn test_strips_list_markers() {
        let input = "- Primer paso\n- Segundo paso\n1. Tercero\n2) Cuarto";
        assert_eq!(to_plain_text(input), "Primer paso\nSegundo paso\nTercero\nCuarto");
    }

    #[test]
    fn test_strips_links_and_images_keeping_text() {
        assert_eq!(
            to_plain_text("Ver [la propuesta](https://example.com/doc) adjunta."),
            "Ver la propuesta adjunta."
        );
        assert_eq!(to_plain_text("![diagrama](img.png)"), "diagrama");
    }

    #[test]
    fn test_strips_inline_code_and_fences() {
        assert_eq!(to_plain_text("Usar `cargo build` aquí."), "Usar cargo build aquí.");
        assert_eq!(to_plain_text("```\ntexto plano\n```"), "texto plano");
    }

    #[test]
    fn test_strips_blockquotes_and_rules() {
        assert_eq!(to_plain_text("> Cita relevante"), "Cita relevante");
        assert_eq!(to_plain_text("antes\n\n---\n\ndespués"), "antes\n\ndespués");
    }

    #[test]
    fn test_nested_emphasis_resolves_fully() {
        assert_eq!(to_plain_text("***muy importante***"), "muy importante");
    }

    #[test]
    fn test_idempotent_on_normalized_text() {
        let samples = [
            "# Título\n\n- uno\n- dos\n\n**fin**",
            "Texto plano sin marcado.",
            "El *análisis* indica [riesgos](x) > 3.",
            "1. Paso uno\n2. Paso dos",
        ];
        for sample in samples {
            let once = to_plain_text(sample);
            let twice = to_plain_text(&once);
            assert_eq!(once, twice, "normalization must be idempotent for {sample:?}");
        }
    }

    #[test]
    fn test_plain_prose_is_untouched() {
        let prose = "La propuesta cumple los requisitos del cliente.";
        assert_eq!(to_plain_text(prose), prose);
    }

    #[test]
    fn test_snake_case_identifiers_survive() {
        assert_eq!(to_plain_text("campo user_id requerido"), "campo user_id requerido");
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        assert_eq!(to_plain_text("  hola  \n\n"), "hola");
    }
}
