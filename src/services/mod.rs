pub mod auth;
pub mod cart;
pub mod catalog;
pub mod exhibition;
pub mod notification;
pub mod order;
