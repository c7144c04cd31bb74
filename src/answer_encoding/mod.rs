pub mod data;
pub mod encode;
