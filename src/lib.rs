pub mod baseline;
pub mod registry;
pub mod report;
pub mod scene;
