pub mod case;
pub mod error;
pub mod field;
pub mod phone;

pub use case::{CaseConverter, TableDriven, Transliterated, UppercaseTransform};
pub use error::CoreError;
pub use field::{FieldClassification, FieldKind, Normalizer};
pub use phone::{normalize_phone, DialPlan, PhoneConfig};
