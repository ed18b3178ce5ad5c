pub mod adapter;
pub mod container;
pub mod handler;
pub mod response;
pub mod security;
