//! Resource modules, one per entity type

pub mod lesson;
pub mod teacher;
