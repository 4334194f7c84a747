//! HTTP inbound adapter rendering the public site.

pub mod contact;
pub mod health;
pub mod pages;
pub mod state;
pub mod views;
