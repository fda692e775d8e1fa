//! Timedtext caption access
//!
//! - URL construction for transcript and track list requests
//! - Raw fetching with newline normalization
//! - XML decoding into transcripts and track lists

pub mod client;
pub mod endpoint;
pub mod list;
pub mod transcript;

pub use client::TimedTextClient;
