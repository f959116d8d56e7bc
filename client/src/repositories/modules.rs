use std::sync::Arc;

use crate::{
    api::ApiClient,
    error::ApiError,
    models::{Assessment, Document, Module},
};

#[derive(Clone)]
pub struct ModulesRepository {
    client: Arc<ApiClient>,
}

impl ModulesRepository {
    pub fn new_with_client(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn by_semester(&self, semester: i32) -> Result<Vec<Module>, ApiError> {
        let modules = self.client.modules_by_semester(semester).await?;
        Ok(modules.into_iter().map(Module::from).collect())
    }

    pub async fn get(&self, id: i32) -> Result<Module, ApiError> {
        self.client.get_module(id).await.map(Module::from)
    }

    pub async fn assessments(&self, id: i32) -> Result<Vec<Assessment>, ApiError> {
        let items = self.client.module_assessments(id).await?;
        Ok(items.into_iter().map(Assessment::from).collect())
    }
}

#[derive(Clone)]
pub struct DocumentsRepository {
    client: Arc<ApiClient>,
}

impl DocumentsRepository {
    pub fn new_with_client(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn by_module(&self, module_id: i32) -> Result<Vec<Document>, ApiError> {
        let docs = self.client.documents_by_module(module_id).await?;
        Ok(docs.into_iter().map(Document::from).collect())
    }
}
