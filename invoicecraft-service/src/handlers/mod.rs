pub mod branding;
pub mod customers;
pub mod documents;
pub mod health;
pub mod items;
pub mod notifications;
pub mod preview;
pub mod templates;
