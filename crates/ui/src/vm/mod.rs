mod review_vm;

pub use review_vm::{BottomBarVm, ReviewScreen, ReviewVm, progress_bar};
