// src/models/sample.rs
//! Sample data set used by the CLI when no data file is given

use serde::de::DeserializeOwned;

use super::{Application, Interview, Job};
use crate::error::{Error, Result};

const JOBS: &str = include_str!("../../data/jobs.json");
const APPLICATIONS: &str = include_str!("../../data/applications.json");
const INTERVIEWS: &str = include_str!("../../data/interviews.json");

fn parse<T: DeserializeOwned>(name: &str, content: &str) -> Result<Vec<T>> {
    serde_json::from_str(content)
        .map_err(|e| Error::RecordParse(format!("sample {}: {}", name, e)))
}

pub fn jobs() -> Result<Vec<Job>> {
    parse("jobs", JOBS)
}

pub fn applications() -> Result<Vec<Application>> {
    parse("applications", APPLICATIONS)
}

pub fn interviews() -> Result<Vec<Interview>> {
    parse("interviews", INTERVIEWS)
}
