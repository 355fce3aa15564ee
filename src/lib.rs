pub mod config;
pub mod contact;
pub mod filter;
pub mod fixtures;
pub mod http;
pub mod model;
pub mod server;
pub mod store;
pub mod util;
pub mod view;
