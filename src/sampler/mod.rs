pub mod disk;
pub mod shade;
