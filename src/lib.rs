//! Localization and request forms for the Messu renovation website.

pub mod config;
pub mod form;
pub mod i18n;
pub mod preference;
pub mod retry;
pub mod submission;
pub mod whatsapp;
