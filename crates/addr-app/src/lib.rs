//! addr-app - Application state and orchestration for the add-address view
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! shipping-address form: state, messages, the update function, action
//! dispatch, the Engine, configuration loading and the network service
//! traits.

pub mod actions;
pub mod config;
pub mod engine;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod services;
pub mod signals;
pub mod state;

// Re-export primary types
pub use config::Settings;
pub use engine::Engine;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppState, FormField, LoadPhase, LookupLevel, Notification, NotificationLevel, Route};
