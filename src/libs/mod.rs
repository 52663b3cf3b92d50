//! Core library modules.
//!
//! - **Model**: [`task`], [`validation`]
//! - **Persistence**: [`store`], [`data_storage`], [`config`]
//! - **Queries**: [`filter`]
//! - **CSV exchange**: [`export`], [`import`], [`reconcile`]
//! - **User interface**: [`messages`], [`view`]

pub mod config;
pub mod data_storage;
pub mod error;
pub mod export;
pub mod filter;
pub mod import;
pub mod messages;
pub mod reconcile;
pub mod store;
pub mod task;
pub mod validation;
pub mod view;
