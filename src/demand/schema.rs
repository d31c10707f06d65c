//! External schema mapping.
//!
//! The downstream list schema has drifted across revisions: the title
//! field was once forwarded as `tituloDemanda` and is now
//! `necessidadeSetor`. All internal→external key decisions live here
//! so a future revision touches only this declaration.

use serde_json::{Value, json};

use crate::demand::model::NormalizedRecord;

/// External key for the request title (was `tituloDemanda`).
pub const TITLE_KEY: &str = "necessidadeSetor";

/// External key for the detailed description.
pub const DESCRIPTION_KEY: &str = "aplicacaoSolicitacao";

/// Build the outbound webhook payload from a normalized record.
pub fn to_external_payload(record: &NormalizedRecord) -> Value {
    json!({
        "solicitante": record.solicitante,
        "email": record.email,
        "setor": record.setor,
        "cargo": record.cargo,
        "empresa": record.empresa,
        (TITLE_KEY): record.necessidade,
        (DESCRIPTION_KEY): record.aplicacao,
        "prioridade": record.prioridade.label(),
        "informacoesGerais": record.informacoes_gerais,
        "origem": record.origem,
        "timestamp": record.timestamp.to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
    })
}
