pub mod auth_commands;
pub mod command_handler;
pub mod handlers;
pub mod meal_commands;
pub mod social_commands;
pub mod user_commands;

pub use command_handler::{Command, CommandHandler};
