use serde::{Deserialize, Serialize};

use crate::api::types::{AssessmentDto, ClassSessionDto, ModuleDto};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    pub id: i32,
    pub code: String,
    pub name: String,
    pub semester: i32,
    pub is_year_module: bool,
    pub class_venue: Option<String>,
    pub week_days: Vec<String>,
    pub start_times: Vec<String>,
    pub end_times: Vec<String>,
    pub sessions: Vec<ClassSession>,
    pub assessments: Vec<Assessment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassSession {
    pub id: i32,
    pub venue: String,
    pub week_day: String,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub module_code: Option<String>,
    /// `yyyy-MM-dd`
    pub date: String,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub due_time: Option<String>,
    pub venue: Option<String>,
    pub is_timed: bool,
}

impl Assessment {
    /// Time used for ordering: the start time, else the due time.
    pub fn sort_time(&self) -> &str {
        self.start_time
            .as_deref()
            .or(self.due_time.as_deref())
            .unwrap_or("")
    }
}

impl From<ModuleDto> for Module {
    fn from(dto: ModuleDto) -> Self {
        Self {
            id: dto.id,
            code: dto.module_code.trim().to_string(),
            name: dto.module_name.trim().to_string(),
            semester: dto.semester,
            is_year_module: dto.is_year_module,
            class_venue: dto.class_venue.map(|v| v.trim().to_string()),
            week_days: dto.week_days.unwrap_or_default(),
            start_times: dto.start_times.unwrap_or_default(),
            end_times: dto.end_times.unwrap_or_default(),
            sessions: dto
                .class_sessions
                .unwrap_or_default()
                .into_iter()
                .map(ClassSession::from)
                .collect(),
            assessments: dto
                .assessments
                .unwrap_or_default()
                .into_iter()
                .map(Assessment::from)
                .collect(),
        }
    }
}

impl From<ClassSessionDto> for ClassSession {
    fn from(dto: ClassSessionDto) -> Self {
        Self {
            id: dto.id,
            venue: dto.venue.trim().to_string(),
            week_day: dto.week_day.trim().to_string(),
            start_time: dto.start_time.trim().to_string(),
            end_time: dto.end_time.trim().to_string(),
        }
    }
}

impl From<AssessmentDto> for Assessment {
    fn from(dto: AssessmentDto) -> Self {
        Self {
            id: dto.id,
            title: dto.title,
            description: dto.description,
            module_code: dto.module_code,
            date: dto.date,
            start_time: dto.start_time,
            end_time: dto.end_time,
            due_time: dto.due_time,
            venue: dto.venue,
            is_timed: dto.is_timed,
        }
    }
}
