// Shared prompt constants and prompt-building utilities.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// Language every analysis answers in unless the caller overrides it.
pub const DEFAULT_LANGUAGE: &str = "español";

/// Directive appended to every per-chunk prompt. Replace `{language}` before sending.
pub const LANGUAGE_DIRECTIVE_TEMPLATE: &str =
    "Responde en {language} de forma clara y profesional.";

/// Fills the language directive for a target language.
pub fn language_directive(language: &str) -> String {
    LANGUAGE_DIRECTIVE_TEMPLATE.replace("{language}", language)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_directive_default() {
        assert_eq!(
            language_directive(DEFAULT_LANGUAGE),
            "Responde en español de forma clara y profesional."
        );
    }

    #[test]
    fn test_language_directive_override() {
        assert_eq!(
            language_directive("inglés"),
            "Responde en inglés de forma clara y profesional."
        );
    }
}
