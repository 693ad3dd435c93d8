// src/models/job.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::listing::{FieldValue, ListableItem};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobType {
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    Contract,
    Internship,
    Remote,
}

impl JobType {
    pub fn as_str(self) -> &'static str {
        match self {
            JobType::FullTime => "Full-time",
            JobType::PartTime => "Part-time",
            JobType::Contract => "Contract",
            JobType::Internship => "Internship",
            JobType::Remote => "Remote",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Active,
    Closed,
    Draft,
}

impl JobStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            JobStatus::Active => "active",
            JobStatus::Closed => "closed",
            JobStatus::Draft => "draft",
        }
    }
}

/// A posted job as shown on the job board and the recruiter dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: JobType,
    pub status: JobStatus,
    pub salary_min: Option<u32>,
    pub salary_max: Option<u32>,
    pub posted_date: NaiveDate,
    #[serde(default)]
    pub applicants: u32,
    #[serde(default)]
    pub skills: Vec<String>,
}

impl ListableItem for Job {
    const SEARCH_FIELDS: &'static [&'static str] = &["title", "company", "location", "skills"];

    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "id" => Some(FieldValue::Text(&self.id)),
            "title" => Some(FieldValue::Text(&self.title)),
            "company" => Some(FieldValue::Text(&self.company)),
            "location" => Some(FieldValue::Text(&self.location)),
            "jobType" => Some(FieldValue::Text(self.job_type.as_str())),
            "status" => Some(FieldValue::Text(self.status.as_str())),
            "salaryMin" => self.salary_min.map(|v| FieldValue::Number(v.into())),
            "salaryMax" => self.salary_max.map(|v| FieldValue::Number(v.into())),
            "postedDate" => Some(FieldValue::date(self.posted_date)),
            "applicants" => Some(FieldValue::Number(self.applicants.into())),
            "skills" => Some(FieldValue::Tags(&self.skills)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_type_wire_names() {
        let json = serde_json::to_string(&JobType::FullTime).unwrap();
        assert_eq!(json, "\"Full-time\"");
        let parsed: JobType = serde_json::from_str("\"Part-time\"").unwrap();
        assert_eq!(parsed.as_str(), "Part-time");
    }

    #[test]
    fn test_job_fields() {
        let job: Job = serde_json::from_str(
            r#"{
                "id": "job-1",
                "title": "Rust Engineer",
                "company": "Ferrous Labs",
                "location": "Remote",
                "jobType": "Contract",
                "status": "active",
                "salaryMin": 90000,
                "salaryMax": null,
                "postedDate": "2024-05-01",
                "skills": ["Rust", "Tokio"]
            }"#,
        )
        .unwrap();

        assert_eq!(job.field("status"), Some(FieldValue::Text("active")));
        assert_eq!(job.field("jobType"), Some(FieldValue::Text("Contract")));
        assert_eq!(job.field("salaryMin"), Some(FieldValue::Number(90000.0)));
        assert_eq!(job.field("salaryMax"), None);
        assert_eq!(job.field("applicants"), Some(FieldValue::Number(0.0)));
        assert_eq!(job.field("unknown"), None);
        assert!(job.field("postedDate").unwrap().equals_facet("2024-05-01"));
    }
}
