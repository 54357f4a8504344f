//! Contact form state. Submission is simulated; nothing leaves the page.

/// How long the fake submission takes.
pub const SUBMIT_DELAY_MS: f64 = 1500.0;
/// How long the success message stays up.
pub const SUCCESS_MESSAGE_MS: f64 = 5000.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Subject,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Subject,
        FormField::Message,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Subject => "subject",
            FormField::Message => "message",
        }
    }

    pub fn from_name(name: &str) -> Option<FormField> {
        FormField::ALL.into_iter().find(|f| f.name() == name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FormPhase {
    Editing,
    Submitting { since_ms: f64 },
    Submitted { since_ms: f64 },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl FormData {
    fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Subject => &mut self.subject,
            FormField::Message => &mut self.message,
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ContactForm {
    pub data: FormData,
    phase: FormPhase,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            data: FormData::default(),
            phase: FormPhase::Editing,
        }
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn set_field(&mut self, field: FormField, value: &str) {
        let slot = self.data.field_mut(field);
        slot.clear();
        slot.push_str(value);
    }

    /// Start the simulated submission. Ignored while one is in flight.
    pub fn submit(&mut self, now_ms: f64) -> bool {
        if matches!(self.phase, FormPhase::Submitting { .. }) {
            return false;
        }
        self.phase = FormPhase::Submitting { since_ms: now_ms };
        true
    }

    /// Advance timers. Returns `true` when the phase changed.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        let next = match self.phase {
            FormPhase::Submitting { since_ms } if now_ms - since_ms >= SUBMIT_DELAY_MS => {
                self.data = FormData::default();
                FormPhase::Submitted { since_ms: now_ms }
            }
            FormPhase::Submitted { since_ms } if now_ms - since_ms >= SUCCESS_MESSAGE_MS => {
                FormPhase::Editing
            }
            _ => return false,
        };
        self.phase = next;
        true
    }
}
