pub mod clock;
pub mod settings;
pub mod source;
