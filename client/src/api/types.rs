use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub user_name: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub surname: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub roles: Option<Vec<Option<String>>>,
    #[serde(default)]
    pub join_date: Option<String>,
    #[serde(default)]
    pub modules: Option<Vec<ModuleMiniDto>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModuleMiniDto {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(rename = "moduleCode", default)]
    pub code: Option<String>,
    #[serde(rename = "moduleName", default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationDto {
    pub id: i32,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub image_path: Option<String>,
    pub created_by: String,
    pub created_at: String,
    #[serde(default)]
    pub module_id: Option<i32>,
    #[serde(default = "default_audience")]
    pub audience: String,
    #[serde(default)]
    pub is_read: Option<bool>,
}

fn default_audience() -> String {
    "All".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleDto {
    pub id: i32,
    pub module_code: String,
    pub module_name: String,
    pub semester: i32,
    #[serde(default)]
    pub is_year_module: bool,
    #[serde(default)]
    pub class_venue: Option<String>,
    #[serde(default)]
    pub week_days: Option<Vec<String>>,
    #[serde(default)]
    pub start_times: Option<Vec<String>>,
    #[serde(default)]
    pub end_times: Option<Vec<String>>,
    #[serde(default)]
    pub class_sessions: Option<Vec<ClassSessionDto>>,
    #[serde(default)]
    pub assessments: Option<Vec<AssessmentDto>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassSessionDto {
    pub id: i32,
    pub venue: String,
    pub week_day: String,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentDto {
    pub id: i32,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub module_code: Option<String>,
    /// `yyyy-MM-dd`
    pub date: String,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub due_time: Option<String>,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub is_timed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentDto {
    pub id: i32,
    pub title: String,
    pub file_path: String,
    pub uploaded_at: String,
    pub uploaded_by: String,
    pub uploaded_by_user_name: String,
    #[serde(default)]
    pub module_id: Option<i32>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub size_bytes: Option<u64>,
    #[serde(default)]
    pub label: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqEntryDto {
    pub id: i32,
    pub question: String,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub last_updated: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryDto {
    pub id: i32,
    pub label: String,
    pub link_url: String,
    pub image_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabBookingDto {
    pub id: i32,
    pub user_name: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    pub week_days: String,
    /// `HH:mm` or `HH:mm:ss`
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub description: Option<String>,
    /// `yyyy-MM-dd`
    pub booking_date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassScheduleDto {
    pub module_code: String,
    pub module_name: String,
    pub venue: String,
    pub week_day: String,
    pub start_time: String,
    pub end_time: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn login_request_uses_camel_case() {
        let body = serde_json::to_value(LoginRequest {
            user_name: "alice".into(),
            password: "secret".into(),
        })
        .unwrap();
        assert_eq!(body, json!({ "userName": "alice", "password": "secret" }));
    }

    #[test]
    fn user_dto_tolerates_nulls_and_missing_fields() {
        let dto: UserDto = serde_json::from_value(json!({
            "userName": "alice",
            "token": null,
            "roles": ["Admin", null]
        }))
        .unwrap();
        assert_eq!(dto.user_name.as_deref(), Some("alice"));
        assert!(dto.token.is_none());
        assert_eq!(dto.roles.unwrap().len(), 2);
        assert!(dto.modules.is_none());
    }

    #[test]
    fn notification_dto_defaults_audience() {
        let dto: NotificationDto = serde_json::from_value(json!({
            "id": 1,
            "type": "General",
            "title": "Exam venue",
            "message": "Moved to hall B",
            "createdBy": "coord",
            "createdAt": "2024-06-01T08:00:00"
        }))
        .unwrap();
        assert_eq!(dto.kind, "General");
        assert_eq!(dto.audience, "All");
        assert!(dto.is_read.is_none());
    }

    #[test]
    fn module_dto_defaults_year_flag_and_lists() {
        let dto: ModuleDto = serde_json::from_value(json!({
            "id": 3,
            "moduleCode": "CSI301",
            "moduleName": "Networks",
            "semester": 1
        }))
        .unwrap();
        assert!(!dto.is_year_module);
        assert!(dto.class_sessions.is_none());
    }

    #[test]
    fn mini_module_uses_module_prefixed_names() {
        let dto: ModuleMiniDto =
            serde_json::from_value(json!({ "id": 7, "moduleCode": "CSI1", "moduleName": "Intro" }))
                .unwrap();
        assert_eq!(dto.code.as_deref(), Some("CSI1"));
        assert_eq!(dto.name.as_deref(), Some("Intro"));
    }
}
