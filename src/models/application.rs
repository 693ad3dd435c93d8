// src/models/application.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::listing::{FieldValue, ListableItem};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Reviewing,
    Interview,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Reviewing => "reviewing",
            ApplicationStatus::Interview => "interview",
            ApplicationStatus::Accepted => "accepted",
            ApplicationStatus::Rejected => "rejected",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: String,
    pub job_id: String,
    pub job_title: String,
    pub company: String,
    pub candidate: String,
    pub status: ApplicationStatus,
    pub applied_date: NaiveDate,
    /// 0-100 fit score shown on the recruiter dashboard
    pub match_score: Option<u8>,
}

impl ListableItem for Application {
    const SEARCH_FIELDS: &'static [&'static str] = &["jobTitle", "company", "candidate"];

    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "id" => Some(FieldValue::Text(&self.id)),
            "jobId" => Some(FieldValue::Text(&self.job_id)),
            "jobTitle" => Some(FieldValue::Text(&self.job_title)),
            "company" => Some(FieldValue::Text(&self.company)),
            "candidate" => Some(FieldValue::Text(&self.candidate)),
            "status" => Some(FieldValue::Text(self.status.as_str())),
            "appliedDate" => Some(FieldValue::date(self.applied_date)),
            "matchScore" => self.match_score.map(|s| FieldValue::Number(s.into())),
            _ => None,
        }
    }
}
