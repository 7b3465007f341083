pub mod explain;
pub mod format;
pub mod zones;
