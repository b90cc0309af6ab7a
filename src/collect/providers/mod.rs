pub mod mock;
pub mod procfs;

pub use mock::MockTaskProvider;
pub use procfs::ProcTaskProvider;
