//! Domain models for invoicecraft-service.

pub mod branding;
pub mod customer;
pub mod document;
pub mod item;
pub mod template;

pub use branding::BrandingSettings;
pub use customer::{Address, Customer};
pub use document::{
    AdditionalCharge, ChargeValueType, Discount, Document, DocumentKind, DocumentStatus, LineItem,
};
pub use item::RepositoryItem;
pub use template::{CoverPageTemplate, MsaTemplate, TermsTemplate};
