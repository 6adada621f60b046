//! Backends module - external collaborator integrations
//!
//! Provides:
//! - webview: the native OS webview window

pub mod webview;
