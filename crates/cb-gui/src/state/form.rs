//! Editing form state.

use cb_store::ContactFields;

/// One of the four form inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Phone,
    Email,
    Address,
}

impl FormField {
    /// All fields in display order.
    pub const ALL: [FormField; 4] = [Self::Name, Self::Phone, Self::Email, Self::Address];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Phone => "Phone",
            Self::Email => "Email",
            Self::Address => "Address",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Name => "Full name",
            Self::Phone => "Phone number",
            Self::Email => "name@example.com",
            Self::Address => "Street, city",
        }
    }

    /// Whether add refuses an empty value for this field.
    pub fn is_required(&self) -> bool {
        matches!(self, Self::Name | Self::Phone)
    }
}

/// Text currently typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    fields: ContactFields,
}

impl FormState {
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.fields.name,
            FormField::Phone => &self.fields.phone,
            FormField::Email => &self.fields.email,
            FormField::Address => &self.fields.address,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::Name => &mut self.fields.name,
            FormField::Phone => &mut self.fields.phone,
            FormField::Email => &mut self.fields.email,
            FormField::Address => &mut self.fields.address,
        };
        *slot = value;
    }

    /// Overwrites all four inputs with a stored contact's fields.
    pub fn load(&mut self, fields: &ContactFields) {
        self.fields = fields.clone();
    }

    pub fn clear(&mut self) {
        self.fields = ContactFields::default();
    }

    /// Snapshot of the inputs as store fields.
    pub fn to_fields(&self) -> ContactFields {
        self.fields.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
