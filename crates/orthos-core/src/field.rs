use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::case::CaseConverter;
use crate::error::CoreError;
use crate::phone::{normalize_phone, PhoneConfig};

/// Which transform a field receives. A field belongs to exactly one
/// category; overlap is a configuration error, not a runtime choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Uppercase,
    Lowercase,
    Phone,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldClassification {
    fields: BTreeMap<String, FieldKind>,
}

impl FieldClassification {
    pub fn from_groups(
        uppercase: &[String],
        lowercase: &[String],
        phone: &[String],
    ) -> Result<Self, CoreError> {
        let mut fields = BTreeMap::new();
        let groups = [
            (FieldKind::Uppercase, uppercase),
            (FieldKind::Lowercase, lowercase),
            (FieldKind::Phone, phone),
        ];
        for (kind, names) in groups {
            for name in names {
                let name = name.trim();
                if name.is_empty() {
                    return Err(CoreError::EmptyFieldName);
                }
                if fields.insert(name.to_string(), kind).is_some() {
                    return Err(CoreError::DuplicateFieldClassification(name.to_string()));
                }
            }
        }
        Ok(Self { fields })
    }

    pub fn kind_of(&self, field: &str) -> Option<FieldKind> {
        self.fields.get(field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, FieldKind)> {
        self.fields.iter().map(|(name, kind)| (name.as_str(), *kind))
    }
}

/// Applies the configured transform to classified fields. Built once at
/// startup and shared by every call site; holds no mutable state.
#[derive(Debug)]
pub struct Normalizer {
    case: CaseConverter,
    phone: PhoneConfig,
    fields: FieldClassification,
}

impl Normalizer {
    pub fn new(case: CaseConverter, phone: PhoneConfig, fields: FieldClassification) -> Self {
        Self {
            case,
            phone,
            fields,
        }
    }

    pub fn case(&self) -> &CaseConverter {
        &self.case
    }

    pub fn phone_config(&self) -> &PhoneConfig {
        &self.phone
    }

    pub fn fields(&self) -> &FieldClassification {
        &self.fields
    }

    pub fn normalize_value(&self, kind: FieldKind, value: &str) -> String {
        match kind {
            FieldKind::Uppercase => self.case.to_uppercase(value.trim()),
            FieldKind::Lowercase => CaseConverter::to_lowercase(value),
            FieldKind::Phone => normalize_phone(value.trim(), &self.phone),
        }
    }

    /// Returns `None` for fields outside the classification; the host
    /// leaves those untouched.
    pub fn normalize_field(&self, field: &str, value: &str) -> Option<String> {
        let kind = self.fields.kind_of(field)?;
        Some(self.normalize_value(kind, value))
    }

    /// Authoritative pass over a whole record before it is persisted.
    /// Returns how many fields changed.
    pub fn normalize_record(&self, record: &mut BTreeMap<String, String>) -> usize {
        let mut changed = 0;
        for (field, value) in record.iter_mut() {
            if let Some(normalized) = self.normalize_field(field, value) {
                if normalized != *value {
                    *value = normalized;
                    changed += 1;
                }
            }
        }
        changed
    }
}
