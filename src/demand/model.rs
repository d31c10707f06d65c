//! Data model for demand submissions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Source tag stamped on every forwarded record.
pub const ORIGIN: &str = "portal-qualidade";

/// Placeholder for a blank/absent role field.
pub const CARGO_DEFAULT: &str = "Não informado";

/// Organization used when the company field is blank/absent.
pub const EMPRESA_DEFAULT: &str = "Grupo A.Cândido";

// ── Raw submission ──────────────────────────────────────────────────

/// Untyped key/value input from the intake form.
///
/// Every field is untrusted and of unknown type: the client may post
/// strings, numbers, booleans, or nothing at all. `from_value` coerces
/// each expected field to trimmed text before validation; unknown
/// fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSubmission {
    /// Requester name.
    pub solicitante: String,
    pub email: String,
    /// Department.
    pub setor: String,
    /// Role (optional).
    pub cargo: String,
    /// Company (optional).
    pub empresa: String,
    /// Request title/summary. Older form revisions posted this under
    /// `tituloDemanda`; both spellings are accepted.
    pub necessidade: String,
    /// Detailed description of the request.
    pub aplicacao: String,
    /// Free-text urgency, constrained to [`Priority`] during validation.
    pub prioridade: String,
    /// Additional notes (optional).
    pub informacoes_gerais: String,
}

impl RawSubmission {
    /// Extract a submission from an arbitrary JSON body.
    pub fn from_value(body: &Value) -> Self {
        let necessidade = match coerce_field(body, "necessidade") {
            s if s.is_empty() => coerce_field(body, "tituloDemanda"),
            s => s,
        };

        Self {
            solicitante: coerce_field(body, "solicitante"),
            email: coerce_field(body, "email"),
            setor: coerce_field(body, "setor"),
            cargo: coerce_field(body, "cargo"),
            empresa: coerce_field(body, "empresa"),
            necessidade,
            aplicacao: coerce_field(body, "aplicacao"),
            prioridade: coerce_field(body, "prioridade"),
            informacoes_gerais: coerce_field(body, "informacoesGerais"),
        }
    }
}

/// Coerce one field of a JSON object to trimmed text.
/// Strings pass through; numbers and booleans are stringified;
/// null, absent, and composite values become empty text.
fn coerce_field(body: &Value, key: &str) -> String {
    match body.get(key) {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

// ── Priority ────────────────────────────────────────────────────────

/// Fixed, ordered urgency enumeration.
///
/// Parsing is exact and case-sensitive; anything outside the set
/// silently coerces to the [`Priority::Media`] default rather than
/// rejecting the submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    Baixa,
    #[default]
    Media,
    Alta,
    Critico,
}

impl Priority {
    /// The localized label forwarded downstream.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Baixa => "Baixa",
            Self::Media => "Média",
            Self::Alta => "Alta",
            Self::Critico => "Crítico",
        }
    }

    /// Normalize free-text input, falling back to the default.
    pub fn normalize(input: &str) -> Self {
        match input {
            "Baixa" => Self::Baixa,
            "Média" => Self::Media,
            "Alta" => Self::Alta,
            "Crítico" => Self::Critico,
            _ => Self::default(),
        }
    }
}

impl Serialize for Priority {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::normalize(&s))
    }
}

// ── Normalized record ───────────────────────────────────────────────

/// The validated, canonicalized submission, ready for forwarding.
///
/// Constructed once per accepted request by `demand::validate`;
/// serialized through `demand::schema` and discarded. Invariants:
/// required fields non-empty, email lower-cased and well-formed,
/// defaults applied to optional fields, `origem`/`timestamp` stamped
/// server-side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NormalizedRecord {
    pub solicitante: String,
    pub email: String,
    pub setor: String,
    pub cargo: String,
    pub empresa: String,
    pub necessidade: String,
    pub aplicacao: String,
    pub prioridade: Priority,
    pub informacoes_gerais: String,
    /// Fixed source tag ([`ORIGIN`]), never client-supplied.
    pub origem: String,
    /// Submission instant, stamped server-side.
    pub timestamp: DateTime<Utc>,
}
