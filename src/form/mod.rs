//! Application form flow, independent of Telegram

pub mod controller;
pub mod event;
pub mod messages;
pub mod store;
pub mod transport;

pub use controller::{Controller, FormSettings};
pub use event::{Action, ButtonAction, Incoming, UserInfo};
pub use store::ApplicationStore;
pub use transport::{Button, Keyboard, Transport};
