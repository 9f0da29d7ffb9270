#![forbid(unsafe_code)]

pub mod console;
pub mod driver;
pub mod error;
pub mod file_selector;
pub mod keys;
pub mod layout;
pub mod runtime;
pub mod theme;
pub mod views;
pub mod vm;

pub use driver::TimerQueue;
pub use error::UiError;
pub use file_selector::{FileSelector, SelectorAction, SelectorStatus};
pub use runtime::{run_file_selector, run_review};
