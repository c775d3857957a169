pub mod compute;
pub mod constants;
pub mod entities;
pub mod input;
