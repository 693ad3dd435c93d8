// src/models/mod.rs
//! Job-board records served through the listing engine

pub mod application;
pub mod interview;
pub mod job;
pub mod sample;

pub use application::{Application, ApplicationStatus};
pub use interview::{Interview, InterviewMode, InterviewStatus};
pub use job::{Job, JobStatus, JobType};
