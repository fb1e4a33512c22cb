//! AWS adapter

pub mod client;

pub use client::AwsProvider;
