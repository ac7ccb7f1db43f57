//! Field rules for the add-company form.
//!
//! Only fields flagged `required` are checked, in this order: email shape,
//! non-blank, then the declared pattern.

use regex::Regex;

use crate::error::FormError;
use crate::mask::Mask;

pub const REQUIRED_MESSAGE: &str = "Este campo é obrigatório.";
pub const EMAIL_MESSAGE: &str = "Por favor, insira um endereço de e-mail válido.";
pub const PATTERN_FALLBACK_MESSAGE: &str = "Formato inválido.";
pub const COUNTRY_MESSAGE: &str = "Por favor, selecione um país.";

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

#[derive(Debug, Clone)]
pub enum FieldKind {
    Text,
    Email(Regex),
}

#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub id: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub pattern: Option<Regex>,
    /// Message shown when `pattern` does not match.
    pub tooltip: Option<&'static str>,
    pub mask: Option<Mask>,
    pub max_len: Option<usize>,
}

impl FieldSpec {
    pub fn text(id: &'static str, label: &'static str) -> Self {
        Self {
            id,
            label,
            kind: FieldKind::Text,
            required: false,
            pattern: None,
            tooltip: None,
            mask: None,
            max_len: None,
        }
    }

    pub fn email(id: &'static str, label: &'static str) -> Result<Self, FormError> {
        let regex = Regex::new(EMAIL_PATTERN).map_err(|source| FormError::Pattern {
            field: id,
            source,
        })?;
        Ok(Self {
            kind: FieldKind::Email(regex),
            ..Self::text(id, label)
        })
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Compiles `pattern` the way an HTML `pattern` attribute is applied:
    /// it has to match the whole value.
    pub fn pattern(
        mut self,
        pattern: &str,
        tooltip: Option<&'static str>,
    ) -> Result<Self, FormError> {
        let anchored = format!("^(?:{pattern})$");
        let regex = Regex::new(&anchored).map_err(|source| FormError::Pattern {
            field: self.id,
            source,
        })?;
        self.pattern = Some(regex);
        self.tooltip = tooltip;
        Ok(self)
    }

    pub fn masked(mut self, mask: Mask) -> Self {
        self.mask = Some(mask);
        self
    }

    pub fn max_len(mut self, max: usize) -> Self {
        self.max_len = Some(max);
        self
    }
}

/// Checks a required field. Optional fields always pass.
pub fn validate_field(spec: &FieldSpec, value: &str) -> Result<(), String> {
    if !spec.required {
        return Ok(());
    }

    let value = value.trim();

    if let FieldKind::Email(regex) = &spec.kind {
        if !regex.is_match(value) {
            return Err(EMAIL_MESSAGE.to_string());
        }
    }

    if value.is_empty() {
        return Err(REQUIRED_MESSAGE.to_string());
    }

    if let Some(pattern) = &spec.pattern {
        if !pattern.is_match(value) {
            return Err(spec.tooltip.unwrap_or(PATTERN_FALLBACK_MESSAGE).to_string());
        }
    }

    Ok(())
}

pub fn validate_select(value: &str) -> Result<(), String> {
    if value.is_empty() {
        Err(COUNTRY_MESSAGE.to_string())
    } else {
        Ok(())
    }
}
