//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep the façade and bridge decoupled from storage details.

pub mod activity_service;
pub mod clock;
pub mod focus_service;
pub mod meeting_service;
pub mod profile_service;
