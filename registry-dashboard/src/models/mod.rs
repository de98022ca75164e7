pub mod business;
pub mod filing;

pub use business::{
    AccountOption, BusinessDetails, BusinessVariant, EmailAudience, GenericRemovalCorpType,
    NameRequest, RemoveBusinessPayload,
};
pub use filing::{FilingStatus, IncorporationFiling};
