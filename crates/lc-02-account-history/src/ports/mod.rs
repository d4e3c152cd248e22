//! # Ports Layer
//!
//! Abstract interfaces between the history domain and its collaborators.

pub mod inbound;
pub mod outbound;

pub use inbound::AccountHistoryApi;
pub use outbound::HistoryStore;
