use super::field::{self, FieldDescriptor, CONFIRM_PASSWORD, PASSWORD};
use super::state::FormState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Login,
    Register,
}

impl FormKind {
    pub fn fields(self) -> &'static [FieldDescriptor] {
        match self {
            FormKind::Login => field::LOGIN_FIELDS,
            FormKind::Register => field::REGISTER_FIELDS,
        }
    }

    pub fn is_controlled(self) -> bool {
        matches!(self, FormKind::Register)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Editing,
    Submitted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("Passwords don't match")]
    PasswordMismatch,
}

#[derive(Debug, Clone)]
pub struct FormController {
    kind: FormKind,
    state: FormState,
    phase: Phase,
}

impl FormController {
    pub fn new(kind: FormKind) -> Self {
        Self {
            kind,
            state: FormState::for_fields(kind.fields()),
            phase: Phase::Editing,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    #[cfg(test)]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns `false` once the form is submitted or when `name` is not a field of it.
    pub fn change(&mut self, name: &str, value: impl Into<String>) -> bool {
        if self.phase == Phase::Submitted {
            return false;
        }

        self.state.set(name, value)
    }

    /// A rejected submit leaves every value in place and the form editable.
    pub fn submit(&mut self) -> Result<FormState, Rejection> {
        if self.kind == FormKind::Register
            && self.state.value(PASSWORD) != self.state.value(CONFIRM_PASSWORD)
        {
            return Err(Rejection::PasswordMismatch);
        }

        self.phase = Phase::Submitted;

        Ok(self.state.clone())
    }
}
