#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod selection_service;
pub mod write_back_service;

pub use catv_core::Clock;

pub use app_services::AppServices;
pub use error::{AppServicesError, SelectionError, WriteBackError};
pub use selection_service::{FileSummary, SelectionService};
pub use write_back_service::{WriteBackEntry, WriteBackFailure, WriteBackReport, WriteBackService};
