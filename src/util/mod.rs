pub mod fs;
pub mod uri;
