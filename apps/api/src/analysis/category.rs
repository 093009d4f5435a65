//! Category Prompt Registry: maps each analysis category to the instruction
//! used for the main per-chunk pass and to the instruction used for the
//! follow-up "suggested steps" pass.
//!
//! The category set is closed and modeled as an enum so every variant is
//! guaranteed an instruction at compile time. String-keyed lookups stay total:
//! unknown labels resolve to generic fallback instructions, never to an error.

use crate::analysis::prompts::{GENERIC_ANALYSIS_INSTRUCTION, GENERIC_FOLLOW_UP_INSTRUCTION};

/// The canonical analysis categories exposed to callers.
///
/// Labels are exact Spanish strings; lookup is case- and accent-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    QuickAnalysis,
    StrategicAlignment,
    CompetitiveAdvantage,
    ParticipationDecision,
    DetailedUnderstanding,
    PainPointIdentification,
    ClarifyingQuestions,
    ResourceEvaluation,
    IndexStructure,
    ExecutiveSummary,
    ProposedSolution,
    AddedValue,
    ExperienceCredentials,
    ProjectTeam,
    TimelineBudget,
    RequirementsCompliance,
    UseCases,
}

impl Category {
    pub const ALL: [Category; 17] = [
        Category::QuickAnalysis,
        Category::StrategicAlignment,
        Category::CompetitiveAdvantage,
        Category::ParticipationDecision,
        Category::DetailedUnderstanding,
        Category::PainPointIdentification,
        Category::ClarifyingQuestions,
        Category::ResourceEvaluation,
        Category::IndexStructure,
        Category::ExecutiveSummary,
        Category::ProposedSolution,
        Category::AddedValue,
        Category::ExperienceCredentials,
        Category::ProjectTeam,
        Category::TimelineBudget,
        Category::RequirementsCompliance,
        Category::UseCases,
    ];

    /// Resolves a canonical label to its category. Exact match only.
    pub fn from_label(label: &str) -> Option<Self> {
        Category::ALL.iter().copied().find(|c| c.label() == label)
    }

    /// The canonical label as shown to users and stored with documents.
    pub fn label(&self) -> &'static str {
        match self {
            Category::QuickAnalysis => "Análisis Rápido",
            Category::StrategicAlignment => "Alineación Estratégica",
            Category::CompetitiveAdvantage => "Ventaja Competitiva",
            Category::ParticipationDecision => "Decisión de Participación",
            Category::DetailedUnderstanding => "Entendimiento Detallado",
            Category::PainPointIdentification => "Identificación de Problemas",
            Category::ClarifyingQuestions => "Preguntas de Clarificación",
            Category::ResourceEvaluation => "Evaluación de Recursos",
            Category::IndexStructure => "Estructura del Índice",
            Category::ExecutiveSummary => "Resumen Ejecutivo",
            Category::ProposedSolution => "Solución Propuesta",
            Category::AddedValue => "Valor Añadido",
            Category::ExperienceCredentials => "Experiencia y Credenciales",
            Category::ProjectTeam => "Equipo de Proyecto",
            Category::TimelineBudget => "Cronograma y Presupuesto",
            Category::RequirementsCompliance => "Cumplimiento de Requisitos",
            Category::UseCases => "Casos de Uso",
        }
    }

    /// Instruction sent with every chunk of the main analysis pass.
    pub fn analysis_instruction(&self) -> &'static str {
        match self {
            Category::QuickAnalysis => {
                "Como experto en análisis de RFP, proporciona un resumen completo y profesional \
                 del siguiente documento. Resume los objetivos principales, el alcance y los \
                 requisitos clave. Luego, enumera los pasos sugeridos para abordar cada punto \
                 importante."
            }
            Category::StrategicAlignment => {
                "Como experto en análisis estratégico, evalúa la alineación del proyecto descrito \
                 en la RFP con la experiencia de la empresa. Destaca fortalezas y debilidades \
                 potenciales, y proporciona pasos claros para mejorar el ajuste estratégico. \
                 Responde en español de forma clara y profesional."
            }
            Category::CompetitiveAdvantage => {
                "Como experto en análisis competitivo, identifica los diferenciadores clave y \
                 ventajas que la empresa puede aprovechar frente a los competidores. Proporciona \
                 un desglose de fortalezas y áreas de mejora, seguido de pasos accionables."
            }
            Category::ParticipationDecision => {
                "Como experto en análisis de decisiones, evalúa la viabilidad de participar en la \
                 RFP en función de los recursos y capacidades actuales. Proporciona una \
                 recomendación clara y los pasos necesarios para preparar una propuesta \
                 competitiva."
            }
            Category::DetailedUnderstanding => {
                "Como experto en análisis de RFP, desglosa los requisitos clave y las \
                 expectativas del cliente. Identifica restricciones y criterios de éxito."
            }
            Category::PainPointIdentification => {
                "Como experto en análisis de problemas, identifica los desafíos y problemas que \
                 el cliente busca resolver en la RFP. Sugiere estrategias efectivas para abordar \
                 estos problemas."
            }
            Category::ClarifyingQuestions => {
                "Como experto en análisis de requisitos, genera una lista de preguntas \
                 aclaratorias basadas en los requisitos y expectativas del cliente mencionados en \
                 la RFP. Asegúrate de que las preguntas sean relevantes y específicas."
            }
            Category::ResourceEvaluation => {
                "Como experto en evaluación de recursos, identifica los recursos necesarios para \
                 abordar la RFP, incluyendo personal, tecnología y presupuesto. Evalúa la \
                 disponibilidad de recursos y los posibles desafíos. Responde en español de \
                 manera clara y concisa."
            }
            Category::IndexStructure => {
                "Como experto en redacción de propuestas, genera una estructura de índice para la \
                 respuesta a la RFP, incluyendo secciones clave como introducción, solución \
                 propuesta, experiencia previa, cronograma y presupuesto."
            }
            Category::ExecutiveSummary => {
                "Como experto en redacción ejecutiva, redacta un resumen que destaque los puntos \
                 clave de la propuesta, incluyendo objetivos, solución ofrecida y principales \
                 beneficios para el cliente."
            }
            Category::ProposedSolution => {
                "Como experto en soluciones propuestas, describe cómo la solución propuesta \
                 aborda los requisitos del cliente, enfatizando el valor añadido y los beneficios \
                 específicos."
            }
            Category::AddedValue => {
                "Como experto en análisis de valor añadido, explica de manera clara y convincente \
                 los beneficios específicos que aporta la solución propuesta, destacando ventajas \
                 competitivas."
            }
            Category::ExperienceCredentials => {
                "Como experto en credenciales y experiencia, resume la experiencia relevante de \
                 la empresa en proyectos similares, destacando logros clave y referencias \
                 significativas."
            }
            Category::ProjectTeam => {
                "Como experto en gestión de proyectos, presenta el equipo de proyecto, incluyendo \
                 roles, responsabilidades y experiencia relevante de cada miembro."
            }
            Category::TimelineBudget => {
                "Como experto en planificación y presupuestación, proporciona un cronograma \
                 detallado con fechas clave y una estimación clara del presupuesto, considerando \
                 recursos y fases del proyecto."
            }
            Category::RequirementsCompliance => {
                "Como experto en cumplimiento de requisitos, valida si la propuesta cumple con \
                 todos los requisitos descritos en la RFP. Indica posibles brechas o áreas que \
                 requieran ajustes o aclaraciones."
            }
            Category::UseCases => {
                "Como experto en análisis de casos de uso, identifica posibles escenarios \
                 prácticos en los que la solución propuesta pueda ser aplicada para satisfacer \
                 los requisitos del cliente. Proporciona ejemplos claros y detallados que \
                 demuestren el valor y la efectividad de la solución en contextos reales. \
                 Responde en español de manera clara y profesional."
            }
        }
    }

    /// Instruction for the follow-up "suggested steps" pass over the summary.
    pub fn follow_up_instruction(&self) -> &'static str {
        match self {
            Category::QuickAnalysis => {
                "Proporciona un análisis completo de los puntos clave y los pasos necesarios \
                 para abordarlos."
            }
            Category::StrategicAlignment => {
                "Evalúa la alineación estratégica y sugiere pasos para mejorar el ajuste."
            }
            Category::CompetitiveAdvantage => {
                "Identifica ventajas competitivas clave y proporciona pasos para maximizar su \
                 impacto."
            }
            Category::ParticipationDecision => {
                "Evalúa la viabilidad de participar y propone pasos concretos para preparar la \
                 propuesta."
            }
            Category::DetailedUnderstanding => {
                "Desglosa los requisitos y sugiere pasos para cumplirlos eficientemente."
            }
            Category::PainPointIdentification => {
                "Identifica los desafíos y problemas clave y propone estrategias para abordarlos."
            }
            Category::ClarifyingQuestions => {
                "Genera preguntas aclaratorias sobre los requisitos y expectativas del cliente."
            }
            Category::ResourceEvaluation => {
                "Identifica recursos necesarios y sugiere estrategias para gestionarlos."
            }
            Category::IndexStructure => {
                "Proporciona una estructura clara y organizada para la respuesta a la RFP."
            }
            Category::ExecutiveSummary => {
                "Redacta un resumen que destaque los puntos clave y beneficios para el cliente."
            }
            Category::ProposedSolution => {
                "Describe cómo la solución aborda los requisitos del cliente y aporta valor."
            }
            Category::AddedValue => {
                "Explica los beneficios específicos y ventajas competitivas de la propuesta."
            }
            Category::ExperienceCredentials => {
                "Resume la experiencia relevante en proyectos similares y logros clave."
            }
            Category::ProjectTeam => {
                "Presenta el equipo con roles y responsabilidades relevantes."
            }
            Category::TimelineBudget => {
                "Proporciona un cronograma detallado y estimación de presupuesto."
            }
            Category::RequirementsCompliance => {
                "Valida el cumplimiento de requisitos y sugiere áreas de ajuste."
            }
            Category::UseCases => {
                "Genera ejemplos de casos de uso relevantes para la propuesta."
            }
        }
    }
}

/// Total lookup for the main analysis instruction. Unknown labels fall back to
/// the generic summary instruction; this never fails and never returns empty.
pub fn analysis_instruction_for(label: &str) -> &'static str {
    Category::from_label(label)
        .map(|c| c.analysis_instruction())
        .unwrap_or(GENERIC_ANALYSIS_INSTRUCTION)
}

/// Total lookup for the follow-up instruction, falling back to the generic
/// "clear, actionable steps" instruction for unknown labels.
pub fn follow_up_instruction_for(label: &str) -> &'static str {
    Category::from_label(label)
        .map(|c| c.follow_up_instruction())
        .unwrap_or(GENERIC_FOLLOW_UP_INSTRUCTION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_nonempty_instructions() {
        for category in Category::ALL {
            assert!(
                !category.analysis_instruction().trim().is_empty(),
                "analysis instruction empty for {category:?}"
            );
            assert!(
                !category.follow_up_instruction().trim().is_empty(),
                "follow-up instruction empty for {category:?}"
            );
        }
    }

    #[test]
    fn test_labels_round_trip_through_from_label() {
        for category in Category::ALL {
            assert_eq!(
                Category::from_label(category.label()),
                Some(category),
                "label {} should resolve back to {category:?}",
                category.label()
            );
        }
    }

    #[test]
    fn test_label_lookup_is_case_and_accent_sensitive() {
        assert_eq!(Category::from_label("Resumen Ejecutivo"), Some(Category::ExecutiveSummary));
        assert_eq!(Category::from_label("resumen ejecutivo"), None);
        assert_eq!(Category::from_label("Analisis Rapido"), None);
    }

    #[test]
    fn test_unknown_label_falls_back_and_never_fails() {
        let steps = follow_up_instruction_for("Totally Unknown Category");
        assert_eq!(steps, "Genera pasos claros y accionables.");

        let analysis = analysis_instruction_for("Totally Unknown Category");
        assert!(!analysis.trim().is_empty());
    }

    #[test]
    fn test_known_label_resolves_specific_instructions() {
        let instruction = analysis_instruction_for("Casos de Uso");
        assert!(instruction.contains("casos de uso"));
        let steps = follow_up_instruction_for("Casos de Uso");
        assert!(steps.contains("casos de uso"));
    }

    #[test]
    fn test_category_count_is_closed_at_seventeen() {
        assert_eq!(Category::ALL.len(), 17);
    }
}
