pub mod database;
pub mod generate;
pub mod server;
pub mod token;
