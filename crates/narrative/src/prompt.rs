//! Prompt construction.

use credrisk_core::AnalysisContext;

use crate::error::NarrativeError;

/// System message sent with every request.
pub const SYSTEM_MESSAGE: &str = "Responda em português do Brasil, tom profissional e direto.";

const INSTRUCTIONS: &str = "\
Você é um assistente de análise de risco de crédito. Você apoia analistas humanos.

Responda OBRIGATORIAMENTE no formato abaixo (sem texto extra):

risk_level: baixo|medio|alto
resumo_executivo: <1 frase>
justificativa:
- ...
- ...
pontos_de_atencao:
- ...
- ...
perguntas_para_verificar:
- ...
- ...

Regras:
- Não invente dados que não estejam no input.
- Se faltar informação, diga explicitamente o que falta (em bullets).
- Faça referência ao prazo e valor do recebível (duplicata) quando relevante.
- Seja objetivo e consistente.";

/// Builds the user prompt: fixed instructions followed by the context as JSON.
///
/// # Errors
///
/// Returns [`NarrativeError::Serialization`] if the context cannot be encoded.
pub fn build_prompt(context: &AnalysisContext) -> Result<String, NarrativeError> {
    let data = context
        .to_json_pretty()
        .map_err(|e| NarrativeError::Serialization(e.to_string()))?;
    Ok(format!("{INSTRUCTIONS}\n\nDADOS (JSON):\n{data}"))
}
