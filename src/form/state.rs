use super::field::{self, FieldDescriptor};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    values: Vec<(&'static str, String)>,
}

impl FormState {
    pub fn for_fields(fields: &[FieldDescriptor]) -> Self {
        let values = field::inputs(fields)
            .filter_map(|field| field.name)
            .map(|name| (name, String::new()))
            .collect();

        Self { values }
    }

    /// Replaces the value of `name`. Returns `false` when the form has no such field.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.values.iter_mut().find(|(key, _)| *key == name) {
            Some((_, current)) => {
                *current = value.into();
                true
            }
            None => false,
        }
    }

    pub fn value(&self, name: &str) -> &str {
        self.get(name).unwrap_or_default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.values.iter().map(|(key, value)| (*key, value.as_str()))
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.values.len()
    }
}
