#![doc = include_str!("../README.md")]
#![warn(clippy::pedantic, missing_docs, unreachable_pub)]

pub mod avatar;
pub mod icon;
pub mod send_button;

pub use avatar::Avatar;
pub use icon::{IconSize, TokenIcon};
pub use send_button::SendButton;
