// HTTP Server modules
pub mod handlers;
pub mod routes;
pub mod state;
pub mod views;

// Conversation core
pub mod chat;
pub mod generator;
pub mod models;
pub mod sessions;
pub mod store;

// Support
pub mod config;
pub mod html;
pub mod logging;
