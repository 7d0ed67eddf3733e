//! HTTP request handlers

pub mod demo;
pub mod health;
pub mod lagged;

pub use lagged::{ErrorStage, LaggedFuture, lagged};
