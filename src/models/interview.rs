// src/models/interview.rs
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::listing::{FieldValue, ListableItem};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterviewMode {
    Video,
    Phone,
    Onsite,
}

impl InterviewMode {
    pub fn as_str(self) -> &'static str {
        match self {
            InterviewMode::Video => "video",
            InterviewMode::Phone => "phone",
            InterviewMode::Onsite => "onsite",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterviewStatus {
    Scheduled,
    Completed,
    Cancelled,
}

impl InterviewStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            InterviewStatus::Scheduled => "scheduled",
            InterviewStatus::Completed => "completed",
            InterviewStatus::Cancelled => "cancelled",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interview {
    pub id: String,
    pub application_id: String,
    pub candidate: String,
    pub job_title: String,
    pub scheduled_at: NaiveDateTime,
    pub duration_minutes: u32,
    pub mode: InterviewMode,
    pub status: InterviewStatus,
    pub interviewer: Option<String>,
}

impl ListableItem for Interview {
    const SEARCH_FIELDS: &'static [&'static str] = &["candidate", "jobTitle", "interviewer"];

    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "id" => Some(FieldValue::Text(&self.id)),
            "applicationId" => Some(FieldValue::Text(&self.application_id)),
            "candidate" => Some(FieldValue::Text(&self.candidate)),
            "jobTitle" => Some(FieldValue::Text(&self.job_title)),
            "scheduledAt" => Some(FieldValue::Date(self.scheduled_at)),
            "durationMinutes" => Some(FieldValue::Number(self.duration_minutes.into())),
            "mode" => Some(FieldValue::Text(self.mode.as_str())),
            "status" => Some(FieldValue::Text(self.status.as_str())),
            "interviewer" => self.interviewer.as_deref().map(FieldValue::Text),
            _ => None,
        }
    }
}
