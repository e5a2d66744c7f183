//! Record storage behind a trait seam.
//!
//! Persistence proper is delegated to the deployment environment; the service
//! itself only needs last-write-wins record storage. The default backend keeps
//! everything in sharded in-memory maps.

use async_trait::async_trait;
use dashmap::DashMap;
use invoicecraft_core::error::AppError;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{
    BrandingSettings, CoverPageTemplate, Customer, Document, DocumentKind, MsaTemplate,
    RepositoryItem, TermsTemplate,
};

#[async_trait]
pub trait Store: Send + Sync {
    async fn list_customers(&self) -> Result<Vec<Customer>, AppError>;
    async fn get_customer(&self, id: Uuid) -> Result<Option<Customer>, AppError>;
    async fn put_customer(&self, customer: Customer) -> Result<(), AppError>;
    async fn delete_customer(&self, id: Uuid) -> Result<bool, AppError>;

    async fn list_items(&self) -> Result<Vec<RepositoryItem>, AppError>;
    async fn get_item(&self, id: Uuid) -> Result<Option<RepositoryItem>, AppError>;
    async fn put_item(&self, item: RepositoryItem) -> Result<(), AppError>;
    async fn delete_item(&self, id: Uuid) -> Result<bool, AppError>;

    async fn list_documents(&self, kind: DocumentKind) -> Result<Vec<Document>, AppError>;
    async fn get_document(
        &self,
        kind: DocumentKind,
        id: Uuid,
    ) -> Result<Option<Document>, AppError>;
    async fn put_document(&self, document: Document) -> Result<(), AppError>;
    async fn delete_document(&self, kind: DocumentKind, id: Uuid) -> Result<bool, AppError>;
    /// Next unused document number for the kind, e.g. "QUO-007".
    async fn next_document_number(&self, kind: DocumentKind) -> Result<String, AppError>;

    async fn list_msa_templates(&self) -> Result<Vec<MsaTemplate>, AppError>;
    async fn get_msa_template(&self, id: Uuid) -> Result<Option<MsaTemplate>, AppError>;
    async fn put_msa_template(&self, template: MsaTemplate) -> Result<(), AppError>;
    async fn delete_msa_template(&self, id: Uuid) -> Result<bool, AppError>;

    async fn list_terms_templates(&self) -> Result<Vec<TermsTemplate>, AppError>;
    async fn get_terms_template(&self, id: Uuid) -> Result<Option<TermsTemplate>, AppError>;
    async fn put_terms_template(&self, template: TermsTemplate) -> Result<(), AppError>;
    async fn delete_terms_template(&self, id: Uuid) -> Result<bool, AppError>;

    async fn list_cover_templates(&self) -> Result<Vec<CoverPageTemplate>, AppError>;
    async fn get_cover_template(&self, id: Uuid) -> Result<Option<CoverPageTemplate>, AppError>;
    async fn put_cover_template(&self, template: CoverPageTemplate) -> Result<(), AppError>;
    async fn delete_cover_template(&self, id: Uuid) -> Result<bool, AppError>;

    async fn get_branding(&self) -> Result<BrandingSettings, AppError>;
    async fn put_branding(&self, branding: BrandingSettings) -> Result<(), AppError>;
}

#[derive(Default)]
pub struct InMemoryStore {
    customers: DashMap<Uuid, Customer>,
    items: DashMap<Uuid, RepositoryItem>,
    documents: DashMap<Uuid, Document>,
    msa_templates: DashMap<Uuid, MsaTemplate>,
    terms_templates: DashMap<Uuid, TermsTemplate>,
    cover_templates: DashMap<Uuid, CoverPageTemplate>,
    branding: RwLock<BrandingSettings>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for InMemoryStore {
    async fn list_customers(&self) -> Result<Vec<Customer>, AppError> {
        let mut customers: Vec<Customer> =
            self.customers.iter().map(|e| e.value().clone()).collect();
        customers.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        Ok(customers)
    }

    async fn get_customer(&self, id: Uuid) -> Result<Option<Customer>, AppError> {
        Ok(self.customers.get(&id).map(|e| e.value().clone()))
    }

    async fn put_customer(&self, customer: Customer) -> Result<(), AppError> {
        self.customers.insert(customer.id, customer);
        Ok(())
    }

    async fn delete_customer(&self, id: Uuid) -> Result<bool, AppError> {
        Ok(self.customers.remove(&id).is_some())
    }

    async fn list_items(&self) -> Result<Vec<RepositoryItem>, AppError> {
        let mut items: Vec<RepositoryItem> = self.items.iter().map(|e| e.value().clone()).collect();
        items.sort_by(|a, b| a.description.to_lowercase().cmp(&b.description.to_lowercase()));
        Ok(items)
    }

    async fn get_item(&self, id: Uuid) -> Result<Option<RepositoryItem>, AppError> {
        Ok(self.items.get(&id).map(|e| e.value().clone()))
    }

    async fn put_item(&self, item: RepositoryItem) -> Result<(), AppError> {
        self.items.insert(item.id, item);
        Ok(())
    }

    async fn delete_item(&self, id: Uuid) -> Result<bool, AppError> {
        Ok(self.items.remove(&id).is_some())
    }

    async fn list_documents(&self, kind: DocumentKind) -> Result<Vec<Document>, AppError> {
        let mut documents: Vec<Document> = self
            .documents
            .iter()
            .filter(|e| e.value().kind == kind)
            .map(|e| e.value().clone())
            .collect();
        // Newest first.
        documents.sort_by(|a, b| b.created_utc.cmp(&a.created_utc));
        Ok(documents)
    }

    async fn get_document(
        &self,
        kind: DocumentKind,
        id: Uuid,
    ) -> Result<Option<Document>, AppError> {
        Ok(self
            .documents
            .get(&id)
            .filter(|e| e.value().kind == kind)
            .map(|e| e.value().clone()))
    }

    async fn put_document(&self, document: Document) -> Result<(), AppError> {
        self.documents.insert(document.id, document);
        Ok(())
    }

    async fn delete_document(&self, kind: DocumentKind, id: Uuid) -> Result<bool, AppError> {
        let matches = self
            .documents
            .get(&id)
            .map(|e| e.value().kind == kind)
            .unwrap_or(false);
        if !matches {
            return Ok(false);
        }
        Ok(self.documents.remove(&id).is_some())
    }

    async fn next_document_number(&self, kind: DocumentKind) -> Result<String, AppError> {
        let prefix = kind.number_prefix();
        let marker = format!("{}-", prefix);
        let highest = self
            .documents
            .iter()
            .filter(|e| e.value().kind == kind)
            .filter_map(|e| {
                e.value()
                    .number
                    .strip_prefix(&marker)
                    .and_then(|suffix| suffix.parse::<u32>().ok())
            })
            .max()
            .unwrap_or(0);
        Ok(format!("{}-{:03}", prefix, highest + 1))
    }

    async fn list_msa_templates(&self) -> Result<Vec<MsaTemplate>, AppError> {
        let mut templates: Vec<MsaTemplate> =
            self.msa_templates.iter().map(|e| e.value().clone()).collect();
        templates.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        Ok(templates)
    }

    async fn get_msa_template(&self, id: Uuid) -> Result<Option<MsaTemplate>, AppError> {
        Ok(self.msa_templates.get(&id).map(|e| e.value().clone()))
    }

    async fn put_msa_template(&self, template: MsaTemplate) -> Result<(), AppError> {
        self.msa_templates.insert(template.id, template);
        Ok(())
    }

    async fn delete_msa_template(&self, id: Uuid) -> Result<bool, AppError> {
        Ok(self.msa_templates.remove(&id).is_some())
    }

    async fn list_terms_templates(&self) -> Result<Vec<TermsTemplate>, AppError> {
        let mut templates: Vec<TermsTemplate> = self
            .terms_templates
            .iter()
            .map(|e| e.value().clone())
            .collect();
        templates.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        Ok(templates)
    }

    async fn get_terms_template(&self, id: Uuid) -> Result<Option<TermsTemplate>, AppError> {
        Ok(self.terms_templates.get(&id).map(|e| e.value().clone()))
    }

    async fn put_terms_template(&self, template: TermsTemplate) -> Result<(), AppError> {
        self.terms_templates.insert(template.id, template);
        Ok(())
    }

    async fn delete_terms_template(&self, id: Uuid) -> Result<bool, AppError> {
        Ok(self.terms_templates.remove(&id).is_some())
    }

    async fn list_cover_templates(&self) -> Result<Vec<CoverPageTemplate>, AppError> {
        let mut templates: Vec<CoverPageTemplate> = self
            .cover_templates
            .iter()
            .map(|e| e.value().clone())
            .collect();
        templates.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        Ok(templates)
    }

    async fn get_cover_template(&self, id: Uuid) -> Result<Option<CoverPageTemplate>, AppError> {
        Ok(self.cover_templates.get(&id).map(|e| e.value().clone()))
    }

    async fn put_cover_template(&self, template: CoverPageTemplate) -> Result<(), AppError> {
        self.cover_templates.insert(template.id, template);
        Ok(())
    }

    async fn delete_cover_template(&self, id: Uuid) -> Result<bool, AppError> {
        Ok(self.cover_templates.remove(&id).is_some())
    }

    async fn get_branding(&self) -> Result<BrandingSettings, AppError> {
        Ok(self.branding.read().await.clone())
    }

    async fn put_branding(&self, branding: BrandingSettings) -> Result<(), AppError> {
        *self.branding.write().await = branding;
        Ok(())
    }
}
