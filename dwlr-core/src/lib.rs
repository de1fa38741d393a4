pub mod projection;
pub mod selection;
pub mod station;
pub mod status;
pub mod summary;
