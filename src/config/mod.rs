pub mod types;
pub mod settings;
pub mod proc_loader;
pub mod proc_initiator;
pub mod proc_validator;
