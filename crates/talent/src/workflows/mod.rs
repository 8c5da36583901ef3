pub mod hiring;
pub mod import;
