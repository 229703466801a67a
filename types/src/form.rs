use std::fmt;

/// A form that must be checked before it is submitted.
pub trait Form {
    /// Labels of required fields that are still empty.
    fn missing_fields(&self) -> Vec<&'static str>;

    /// Checks on filled-in values, run once nothing is missing.
    fn check_values(&self) -> Result<(), ValidationError> {
        Ok(())
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(ValidationError::Missing(missing));
        }

        self.check_values()
    }

    /// [`Form::validate`] for server functions: failures become a 400.
    fn validate_request(&self) -> crate::Result<()> {
        Ok(self.validate()?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Missing(Vec<&'static str>),
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Missing(fields) => match fields.as_slice() {
                [field] => write!(f, "{field} is required."),
                _ => write!(f, "All fields must be filled in."),
            },
            ValidationError::Invalid { field, reason } => write!(f, "{field} {reason}."),
        }
    }
}

/// Whether a form creates a new record or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormTarget<Id> {
    Create,
    Edit(Id),
}

impl<Id: Copy> FormTarget<Id> {
    pub fn id(&self) -> Option<Id> {
        match self {
            FormTarget::Create => None,
            FormTarget::Edit(id) => Some(*id),
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self, FormTarget::Edit(_))
    }

    pub fn title(&self, noun: &str) -> String {
        match self {
            FormTarget::Create => format!("Add {noun}"),
            FormTarget::Edit(_) => format!("Edit {noun}"),
        }
    }

    pub fn submit_label(&self, busy: bool) -> &'static str {
        match (self, busy) {
            (FormTarget::Create, false) => "Save",
            (FormTarget::Create, true) => "Saving...",
            (FormTarget::Edit(_), false) => "Update",
            (FormTarget::Edit(_), true) => "Updating...",
        }
    }
}

/// Empty after trimming.
pub(crate) fn blank(value: &str) -> bool {
    value.trim().is_empty()
}
