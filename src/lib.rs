pub mod export;
pub mod read;
pub mod table;
