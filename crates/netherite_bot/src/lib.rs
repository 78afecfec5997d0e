//! Discord client, dispatcher, and command handlers for Netherite.
//!
//! The pipeline: Serenity delivers a message, [`dispatch::parse`] decides
//! whether it is a command, the [`CooldownGate`] admits or rejects it per
//! user, [`commands::execute`] runs the handler against the shared
//! [`BotContext`], and [`render`] turns the resulting [`Reply`] into a
//! Discord message. No step after parsing can fail the process; errors are
//! logged and answered with user-facing text.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
pub mod commands;
mod config;
mod context;
mod cooldown;
pub mod dispatch;
mod error;
mod handler;
pub mod render;

pub use client::NetheriteBot;
pub use commands::{execute, GatewayInfo, Reply};
pub use config::Settings;
pub use context::BotContext;
pub use cooldown::{CommandClass, CooldownGate};
pub use dispatch::{parse, Command, Invocation};
pub use error::{BotError, BotErrorKind, BotResult};
pub use handler::NetheriteHandler;
