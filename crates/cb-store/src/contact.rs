//! Contact records and the editable field set.

use crate::ids::ContactId;

/// Fields that must be present when a contact is added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequiredField {
    Name,
    Phone,
}

impl RequiredField {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Phone => "Phone",
        }
    }

    /// Human-readable sentence naming the missing fields, e.g.
    /// `"Name and Phone are required"`.
    pub fn describe(missing: &[RequiredField]) -> String {
        match missing {
            [] => "No field is required".to_string(),
            [only] => format!("{} is required", only.label()),
            fields => {
                let labels: Vec<&str> = fields.iter().map(RequiredField::label).collect();
                format!("{} are required", labels.join(" and "))
            }
        }
    }
}

/// The four user-editable fields of a contact.
///
/// Optional fields are empty strings when absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl ContactFields {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
            address: address.into(),
        }
    }

    /// Required fields that are empty, in form order.
    pub fn missing_required(&self) -> Vec<RequiredField> {
        let mut missing = Vec::new();
        if self.name.is_empty() {
            missing.push(RequiredField::Name);
        }
        if self.phone.is_empty() {
            missing.push(RequiredField::Phone);
        }
        missing
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.phone.is_empty()
            && self.email.is_empty()
            && self.address.is_empty()
    }
}

/// A stored contact: stable id plus its current fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    id: ContactId,
    fields: ContactFields,
}

impl Contact {
    pub(crate) fn new(fields: ContactFields) -> Self {
        Self {
            id: ContactId::new(),
            fields,
        }
    }

    pub fn id(&self) -> ContactId {
        self.id
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn name(&self) -> &str {
        &self.fields.name
    }

    pub fn phone(&self) -> &str {
        &self.fields.phone
    }

    pub fn email(&self) -> &str {
        &self.fields.email
    }

    pub fn address(&self) -> &str {
        &self.fields.address
    }

    /// Overwrites every field; the id is kept.
    pub(crate) fn replace_fields(&mut self, fields: ContactFields) {
        self.fields = fields;
    }

    /// Search predicate: case-insensitive substring of the name, or exact
    /// substring of the phone.
    pub fn matches(&self, query: &str) -> bool {
        self.fields
            .name
            .to_lowercase()
            .contains(&query.to_lowercase())
            || self.fields.phone.contains(query)
    }
}
