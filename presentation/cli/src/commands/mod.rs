pub mod backup;
pub mod check;
pub mod import;
