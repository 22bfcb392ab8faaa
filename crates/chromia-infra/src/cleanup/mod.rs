mod scheduler;

pub use scheduler::DeletionScheduler;
