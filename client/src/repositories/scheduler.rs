use std::sync::Arc;

use chrono::NaiveDate;

use crate::{
    api::ApiClient,
    error::ApiError,
    models::{Assessment, ClassScheduleItem},
    scheduling::{
        resolve_week_bookings,
        timetable::{normalize_classes, sort_assessments},
        WeekBookings,
    },
};

#[derive(Clone)]
pub struct SchedulerRepository {
    client: Arc<ApiClient>,
}

impl SchedulerRepository {
    pub fn new_with_client(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// This week's lab bookings from the source the stored roles allow.
    pub async fn lab_bookings(&self, today: NaiveDate) -> Result<WeekBookings, ApiError> {
        let session = Arc::clone(self.client.session());
        resolve_week_bookings(self.client.as_ref(), session.as_ref(), today).await
    }

    /// Monday-Saturday classes in display order.
    pub async fn class_schedule(&self, semester: i32) -> Result<Vec<ClassScheduleItem>, ApiError> {
        let items: Vec<ClassScheduleItem> = self
            .client
            .get_class_schedule(semester)
            .await?
            .into_iter()
            .map(ClassScheduleItem::from)
            .collect();
        Ok(normalize_classes(&items))
    }

    pub async fn assessment_schedule(&self, semester: i32) -> Result<Vec<Assessment>, ApiError> {
        let mut items: Vec<Assessment> = self
            .client
            .get_assessment_schedule(semester)
            .await?
            .into_iter()
            .map(Assessment::from)
            .collect();
        sort_assessments(&mut items);
        Ok(items)
    }
}
