// BookBuddies Marketplace - Core
//
// This crate holds the non-visual logic behind the marketplace screens: the
// book listing form, the support chat session and the seller registration form.
// Persistence, media picking and navigation are reached through kernel traits.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;

pub use config::*;
