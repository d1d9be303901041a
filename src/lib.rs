//! Friend-only trip listing service.
//!
//! A user's trips are visible to the users recorded as their friends and
//! to nobody else. See [`services::TripService`] for the decision and
//! [`api`] for the HTTP surface.

pub mod api;
pub mod auth;
pub mod config;
pub mod database;
pub mod middleware;
pub mod models;
pub mod seeds;
pub mod services;
pub mod state;
pub mod utils;
