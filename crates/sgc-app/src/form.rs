//! Text-field primitives shared by the edit views

use sgc_core::validation::{FieldError, FieldResult};

/// One editable text value and its last validation error
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    pub value: String,
    pub error: Option<FieldError>,
}

impl TextField {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            error: None,
        }
    }

    /// Editing clears the field's error until the next validation
    pub fn insert(&mut self, c: char) {
        self.value.push(c);
        self.error = None;
    }

    pub fn backspace(&mut self) {
        self.value.pop();
        self.error = None;
    }

    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.error = None;
    }

    /// Record the outcome of a validator, keeping its value on success
    pub fn check<T>(&mut self, result: FieldResult<T>) -> Option<T> {
        match result {
            Ok(value) => {
                self.error = None;
                Some(value)
            }
            Err(err) => {
                self.error = Some(err);
                None
            }
        }
    }
}

/// What a form widget needs to draw one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRow<'a> {
    pub label: &'static str,
    pub value: &'a str,
    pub error: Option<&'a FieldError>,
    pub masked: bool,
    pub focused: bool,
    /// Placeholder or helper text
    pub hint: Option<String>,
}

impl<'a> FieldRow<'a> {
    pub fn new(label: &'static str, field: &'a TextField, focused: bool) -> Self {
        Self {
            label,
            value: &field.value,
            error: field.error.as_ref(),
            masked: false,
            focused,
            hint: None,
        }
    }

    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }

    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Outcome indicator of a connectivity or pattern test
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CheckIndicator {
    #[default]
    Idle,
    Checking,
    Verified,
    Failed,
}

impl CheckIndicator {
    pub fn label(&self) -> &'static str {
        match self {
            CheckIndicator::Idle => "Not tested",
            CheckIndicator::Checking => "Checking...",
            CheckIndicator::Verified => "Verified",
            CheckIndicator::Failed => "Failed",
        }
    }

    pub fn settled(success: bool) -> Self {
        if success {
            CheckIndicator::Verified
        } else {
            CheckIndicator::Failed
        }
    }
}

/// Cycle through the variants of a small field enum
macro_rules! field_cycle {
    ($name:ident { $($variant:ident),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub enum $name {
            #[default]
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            fn position(&self) -> usize {
                Self::ALL.iter().position(|f| f == self).unwrap_or(0)
            }

            pub fn next(&self) -> Self {
                Self::ALL[(self.position() + 1) % Self::ALL.len()]
            }

            pub fn prev(&self) -> Self {
                Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
            }
        }
    };
}

pub(crate) use field_cycle;
