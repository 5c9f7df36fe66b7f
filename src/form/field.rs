pub const FULLNAME: &str = "fullname";
pub const EMAIL: &str = "email";
pub const PASSWORD: &str = "password";
pub const CONFIRM_PASSWORD: &str = "confirmPassword";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Password,
    Submit,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Email => "email",
            FieldKind::Password => "password",
            FieldKind::Submit => "submit",
        }
    }

    pub fn is_submit(&self) -> bool {
        matches!(self, FieldKind::Submit)
    }
}

/// Static description of one form input or of the submit control.
///
/// For inputs `text` is the placeholder, for the submit control it is the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub kind: FieldKind,
    pub name: Option<&'static str>,
    pub text: &'static str,
}

impl FieldDescriptor {
    pub const fn input(kind: FieldKind, name: &'static str, placeholder: &'static str) -> Self {
        Self {
            kind,
            name: Some(name),
            text: placeholder,
        }
    }

    pub const fn submit(label: &'static str) -> Self {
        Self {
            kind: FieldKind::Submit,
            name: None,
            text: label,
        }
    }
}

pub const LOGIN_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::input(FieldKind::Email, EMAIL, "test@example.com"),
    FieldDescriptor::input(FieldKind::Password, PASSWORD, "Password"),
    FieldDescriptor::submit("Sign in"),
];

pub const REGISTER_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::input(FieldKind::Text, FULLNAME, "Jonh Doe"),
    FieldDescriptor::input(FieldKind::Email, EMAIL, "test@example.com"),
    FieldDescriptor::input(FieldKind::Password, PASSWORD, "Password"),
    FieldDescriptor::input(FieldKind::Password, CONFIRM_PASSWORD, "Confirm password"),
    FieldDescriptor::submit("Register account"),
];

pub fn inputs(fields: &[FieldDescriptor]) -> impl Iterator<Item = &FieldDescriptor> {
    fields.iter().filter(|field| !field.kind.is_submit())
}

pub fn submit(fields: &[FieldDescriptor]) -> Option<&FieldDescriptor> {
    fields.iter().find(|field| field.kind.is_submit())
}
