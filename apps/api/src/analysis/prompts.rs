// All LLM prompt constants for the Analysis module.
// Reuses cross-cutting fragments from llm_client::prompts.

/// Per-chunk prompt template for the main analysis pass.
/// Replace: {category}, {chunk}, {instruction}, {language_directive}
pub const CHUNK_PROMPT_TEMPLATE: &str = "{category}: {chunk}\n\n{instruction}\n\n{language_directive}";

/// Follow-up prompt template for the "suggested steps" pass over the
/// aggregated summary. Replace: {instruction}, {summary}
pub const FOLLOW_UP_PROMPT_TEMPLATE: &str = "{instruction}\n\nResumen del análisis:\n{summary}\n\nPasos sugeridos para abordar los puntos clave mencionados en el análisis:";

/// Fallback main-pass instruction for categories outside the canonical set.
pub const GENERIC_ANALYSIS_INSTRUCTION: &str =
    "Como experto en análisis de RFP, proporciona un resumen completo y profesional del \
     siguiente documento. Resume los objetivos principales, el alcance y los requisitos clave. \
     Luego, enumera los pasos sugeridos para abordar cada punto importante.";

/// Fallback follow-up instruction for categories outside the canonical set.
pub const GENERIC_FOLLOW_UP_INSTRUCTION: &str = "Genera pasos claros y accionables.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_template_has_all_placeholders() {
        for placeholder in ["{category}", "{chunk}", "{instruction}", "{language_directive}"] {
            assert!(
                CHUNK_PROMPT_TEMPLATE.contains(placeholder),
                "chunk template missing {placeholder}"
            );
        }
    }

    #[test]
    fn test_follow_up_template_has_all_placeholders() {
        for placeholder in ["{instruction}", "{summary}"] {
            assert!(
                FOLLOW_UP_PROMPT_TEMPLATE.contains(placeholder),
                "follow-up template missing {placeholder}"
            );
        }
        assert!(FOLLOW_UP_PROMPT_TEMPLATE.contains("Pasos sugeridos"));
    }
}
