use crate::form::controller::FormKind;
use crate::form::field;
use crate::form::state::FormState;

/// One rendered input. `value` is only emitted for controlled forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputView {
    pub kind: &'static str,
    pub name: &'static str,
    pub placeholder: &'static str,
    pub value: String,
    pub controlled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonView {
    pub kind: &'static str,
    pub label: &'static str,
}

pub fn input_views(kind: FormKind, state: &FormState) -> Vec<InputView> {
    let controlled = kind.is_controlled();

    field::inputs(kind.fields())
        .map(|descriptor| {
            let name = descriptor.name.unwrap_or_default();

            InputView {
                kind: descriptor.kind.as_str(),
                name,
                placeholder: descriptor.text,
                value: if controlled {
                    state.value(name).to_string()
                } else {
                    String::new()
                },
                controlled,
            }
        })
        .collect()
}

pub fn button_view(kind: FormKind) -> ButtonView {
    let label = field::submit(kind.fields()).map_or("Submit", |descriptor| descriptor.text);

    ButtonView {
        kind: field::FieldKind::Submit.as_str(),
        label,
    }
}
