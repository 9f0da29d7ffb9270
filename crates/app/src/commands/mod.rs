pub mod files;
pub mod review;
