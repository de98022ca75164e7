pub mod add_business;
pub mod field;
pub mod registry;
pub mod state;
pub mod validation;

pub use add_business::{
    AddBusinessForm, AddBusinessPayload, AddBusinessProps, FormView, OptionLayout, SubmitOutcome,
};
pub use field::{FieldId, FieldKind, FieldValue};
pub use registry::{AuthOptionKind, AuthOptionRegistry, AvailableOption, ConfiguredOption};
pub use state::FormState;
pub use validation::{FieldError, ValidationContext, ValidationRuleSet};
