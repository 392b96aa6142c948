//! Backend services: session state and external collaborator clients.

pub mod answer;
pub mod sessions;
pub mod speech;
