use super::{
    client::ApiClient,
    types::{AssessmentDto, DocumentDto, ModuleDto},
};
use crate::error::ApiError;

impl ApiClient {
    pub async fn modules_by_semester(&self, semester: i32) -> Result<Vec<ModuleDto>, ApiError> {
        self.get_json(&format!("api/Modules/semester/{}", semester), &[])
            .await
    }

    pub async fn get_module(&self, id: i32) -> Result<ModuleDto, ApiError> {
        self.get_json(&format!("api/Modules/{}", id), &[]).await
    }

    pub async fn module_assessments(&self, id: i32) -> Result<Vec<AssessmentDto>, ApiError> {
        self.get_json(&format!("api/Modules/{}/assessments", id), &[])
            .await
    }

    pub async fn documents_by_module(&self, module_id: i32) -> Result<Vec<DocumentDto>, ApiError> {
        self.get_json(&format!("api/Documents/module/{}", module_id), &[])
            .await
    }
}
