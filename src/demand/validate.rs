//! Intake validator/normalizer.
//!
//! Pure function of (raw submission, current instant): enforces the
//! required-field contract, validates email syntax, normalizes the
//! priority enumeration, applies optional-field defaults, and stamps
//! the system-generated fields. Never touches the network.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;

use crate::demand::model::{
    CARGO_DEFAULT, EMPRESA_DEFAULT, NormalizedRecord, ORIGIN, Priority, RawSubmission,
};
use crate::error::ValidationError;

/// Permissive email shape: exactly one `@`, no embedded whitespace,
/// at least one `.` after the `@`.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

/// Validate a raw submission and produce the canonical record.
///
/// Missing required fields are aggregated into a single
/// [`ValidationError::MissingFields`] so the client can render every
/// problem at once. The email syntax check runs only once the field
/// is known to be present.
pub fn validate_and_normalize(
    raw: &RawSubmission,
    now: DateTime<Utc>,
) -> Result<NormalizedRecord, ValidationError> {
    let required = [
        ("solicitante", raw.solicitante.trim()),
        ("email", raw.email.trim()),
        ("setor", raw.setor.trim()),
        ("necessidade", raw.necessidade.trim()),
        ("aplicacao", raw.aplicacao.trim()),
        ("prioridade", raw.prioridade.trim()),
    ];

    let missing: Vec<String> = required
        .iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(ValidationError::MissingFields(missing));
    }

    let email = raw.email.trim().to_lowercase();
    if !EMAIL_RE.is_match(&email) {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(NormalizedRecord {
        solicitante: raw.solicitante.trim().to_string(),
        email,
        setor: raw.setor.trim().to_string(),
        cargo: default_if_blank(&raw.cargo, CARGO_DEFAULT),
        empresa: default_if_blank(&raw.empresa, EMPRESA_DEFAULT),
        necessidade: raw.necessidade.trim().to_string(),
        aplicacao: raw.aplicacao.trim().to_string(),
        prioridade: Priority::normalize(raw.prioridade.trim()),
        informacoes_gerais: raw.informacoes_gerais.trim().to_string(),
        origem: ORIGIN.to_string(),
        timestamp: now,
    })
}

fn default_if_blank(value: &str, default: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}
