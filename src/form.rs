use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::FormError;
use crate::mask::Mask;
use crate::validation::{validate_field, validate_select, FieldSpec};

/// Validity marker of a field, the counterpart of the `is-valid` /
/// `is-invalid` classes plus the inline alert.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldState {
    #[default]
    Untouched,
    Valid,
    Invalid(String),
}

impl FieldState {
    fn from_result(result: Result<(), String>) -> Self {
        match result {
            Ok(()) => FieldState::Valid,
            Err(message) => FieldState::Invalid(message),
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, FieldState::Invalid(_))
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FieldState::Invalid(message) => Some(message),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TextField {
    pub spec: FieldSpec,
    pub value: String,
    pub state: FieldState,
}

impl TextField {
    fn new(spec: FieldSpec) -> Self {
        Self {
            spec,
            value: String::new(),
            state: FieldState::Untouched,
        }
    }

    fn validate(&mut self) -> bool {
        // Optional fields carry no state classes.
        if !self.spec.required {
            return true;
        }
        self.state = FieldState::from_result(validate_field(&self.spec, &self.value));
        !self.state.is_invalid()
    }

    fn push(&mut self, c: char) {
        let mut candidate = self.value.clone();
        candidate.push(c);
        self.set_raw(&candidate);
    }

    fn pop(&mut self) {
        // Masked values always end in a digit, so this never strands a
        // separator.
        let mut candidate = self.value.clone();
        candidate.pop();
        self.set_raw(&candidate);
    }

    fn set_raw(&mut self, raw: &str) {
        let value = match self.spec.mask {
            Some(mask) => mask.apply(raw),
            None => raw.to_string(),
        };
        if let Some(max) = self.spec.max_len {
            if value.chars().count() > max {
                return;
            }
        }
        self.value = value;
        // Errors only come back on blur or submit.
        self.state = FieldState::Untouched;
    }
}

pub const COUNTRY_CHOICES: [(&str, &str); 10] = [
    ("", "-- Selecione o País --"),
    ("Brasil", "Brasil"),
    ("Portugal", "Portugal"),
    ("Estados Unidos", "Estados Unidos"),
    ("Canada", "Canadá"),
    ("Alemanha", "Alemanha"),
    ("Espanha", "Espanha"),
    ("Franca", "França"),
    ("Japao", "Japão"),
    ("Reino Unido", "Reino Unido"),
];

#[derive(Debug, Clone)]
pub struct SelectField {
    pub id: &'static str,
    pub label: &'static str,
    pub choices: &'static [(&'static str, &'static str)],
    pub selected: usize,
    pub state: FieldState,
}

impl SelectField {
    pub fn value(&self) -> &'static str {
        self.choices[self.selected].0
    }

    pub fn display(&self) -> &'static str {
        self.choices[self.selected].1
    }

    fn validate(&mut self) -> bool {
        self.state = FieldState::from_result(validate_select(self.value()));
        !self.state.is_invalid()
    }

    fn cycle(&mut self, forward: bool) {
        let len = self.choices.len();
        self.selected = if forward {
            (self.selected + 1) % len
        } else {
            (self.selected + len - 1) % len
        };
    }
}

/// Position in the tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Text(usize),
    Country,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanySubmission {
    pub fields: BTreeMap<&'static str, String>,
    pub country: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted(CompanySubmission),
    Blocked { first_invalid: Slot },
}

#[derive(Debug, Clone)]
pub struct CompanyForm {
    pub fields: Vec<TextField>,
    pub country: SelectField,
    pub order: Vec<Slot>,
    pub focus: usize,
    /// First slot drawn by the renderer.
    pub scroll: usize,
}

impl CompanyForm {
    /// The add-company form: required name, CNPJ, code, rate, country and
    /// email, plus an optional address block, phone and website.
    pub fn company() -> Result<Self, FormError> {
        let fields = vec![
            FieldSpec::text("name", "Nome da Financeira")
                .required()
                .max_len(100)
                .pattern(
                    r"[a-zA-Z0-9\sà-úÀ-Ú.-]{2,100}",
                    Some("Use de 2 a 100 letras, números, espaços, hífens e pontos."),
                )?,
            FieldSpec::text("cnpj", "CNPJ")
                .required()
                .masked(Mask::Cnpj)
                .pattern(
                    r"\d{2}\.\d{3}\.\d{3}/\d{4}-\d{2}",
                    Some("Formato de CNPJ inválido. Use XX.XXX.XXX/XXXX-XX."),
                )?,
            FieldSpec::text("code", "Código")
                .required()
                .max_len(10)
                .pattern(
                    r"[A-Z0-9]{3,10}",
                    Some("O código deve ter entre 3 e 10 caracteres alfanuméricos maiúsculos."),
                )?,
            FieldSpec::text("basic_interest_rate", "Taxa de Juros Anual (%)")
                .required()
                .max_len(6)
                .pattern(
                    r"\d{1,3}([.,]\d{1,2})?",
                    Some("Informe a taxa como número, por exemplo 12,5."),
                )?,
            FieldSpec::text("contact_phone", "Telefone de Contato").masked(Mask::Phone),
            FieldSpec::email("contact_email", "Email de Contato")?
                .required()
                .max_len(120),
            FieldSpec::text("website_url", "Website").max_len(200),
            FieldSpec::text("address_street", "Rua/Avenida").max_len(200),
            FieldSpec::text("address_number", "Número").max_len(20),
            FieldSpec::text("address_complement", "Complemento").max_len(100),
            FieldSpec::text("address_neighborhood", "Bairro").max_len(100),
            FieldSpec::text("address_city", "Cidade").max_len(100),
            FieldSpec::text("address_state", "Estado/Província").max_len(50),
            FieldSpec::text("address_zipcode", "CEP / Código Postal").max_len(20),
        ];

        let country = SelectField {
            id: "country",
            label: "País de Origem",
            choices: &COUNTRY_CHOICES,
            selected: 0,
            state: FieldState::Untouched,
        };

        // Address block sits between the country and the contact fields.
        let order = (0..4)
            .map(Slot::Text)
            .chain([Slot::Country])
            .chain((7..14).map(Slot::Text))
            .chain((4..7).map(Slot::Text))
            .collect();

        let mut form = Self {
            fields: fields.into_iter().map(TextField::new).collect(),
            country,
            order,
            focus: 0,
            scroll: 0,
        };
        form.country.validate();
        Ok(form)
    }

    pub fn focused(&self) -> Slot {
        self.order[self.focus]
    }

    pub fn state_of(&self, slot: Slot) -> &FieldState {
        match slot {
            Slot::Text(i) => &self.fields[i].state,
            Slot::Country => &self.country.state,
        }
    }

    pub fn field(&self, id: &str) -> Option<&TextField> {
        self.fields.iter().find(|f| f.spec.id == id)
    }

    pub fn input(&mut self, c: char) {
        if let Slot::Text(i) = self.focused() {
            self.fields[i].push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Slot::Text(i) = self.focused() {
            self.fields[i].pop();
        }
    }

    /// Left/Right on the country select.
    pub fn cycle_choice(&mut self, forward: bool) {
        if self.focused() == Slot::Country {
            self.country.cycle(forward);
            self.country.validate();
        }
    }

    fn blur(&mut self) {
        match self.focused() {
            Slot::Text(i) => {
                self.fields[i].validate();
            }
            Slot::Country => {
                self.country.validate();
            }
        }
    }

    pub fn focus_next(&mut self) {
        self.blur();
        self.focus = (self.focus + 1) % self.order.len();
    }

    pub fn focus_prev(&mut self) {
        self.blur();
        self.focus = (self.focus + self.order.len() - 1) % self.order.len();
    }

    /// Keeps the focused slot inside a window of `visible` slots.
    pub fn ensure_visible(&mut self, visible: usize) {
        let visible = visible.max(1);
        if self.focus < self.scroll {
            self.scroll = self.focus;
        } else if self.focus >= self.scroll + visible {
            self.scroll = self.focus + 1 - visible;
        }
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        let mut valid = true;
        for field in &mut self.fields {
            if !field.validate() {
                valid = false;
            }
        }
        if !self.country.validate() {
            valid = false;
        }

        if !valid {
            let position = self
                .order
                .iter()
                .position(|slot| self.state_of(*slot).is_invalid())
                .unwrap_or(0);
            self.focus = position;
            return SubmitOutcome::Blocked {
                first_invalid: self.order[position],
            };
        }

        SubmitOutcome::Accepted(CompanySubmission {
            fields: self
                .fields
                .iter()
                .map(|f| (f.spec.id, f.value.trim().to_string()))
                .collect(),
            country: self.country.value(),
        })
    }
}
