//! Command implementations.

pub mod assess;
pub mod batch;
pub mod criteria;
pub mod init;

pub use self::assess::execute_assess;
pub use self::batch::execute_batch;
pub use self::criteria::execute_criteria;
pub use self::init::execute_init;
