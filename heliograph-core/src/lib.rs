//! Board-agnostic logic for the data node serial link
//!
//! This crate contains the link logic that does not depend on specific
//! hardware implementations:
//!
//! - Per-kind inbox with single-pending delivery gating
//! - Routing of classified lines into the inbox
//! - Link configuration type definitions

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod inbox;
pub mod route;
