//! Request payloads for the REST surface.

pub mod customers;
pub mod documents;
pub mod items;
pub mod templates;

pub use customers::CustomerPayload;
pub use documents::{
    AdditionalChargePayload, DiscountPayload, DocumentPayload, LineItemPayload,
    NextNumberResponse, TermsUpdatePayload,
};
pub use items::RepositoryItemPayload;
pub use templates::{CoverPageTemplatePayload, MsaTemplatePayload, TermsTemplatePayload};
