//! Reusable view components shared by pages.

pub mod confirm_dialog;
pub mod nav_bar;
pub mod trip_card;
