//! Cross-subsystem integration flows.

mod flows;
mod gateway;
