//! Shared configuration access for the Jellyhook crates.

pub mod environment;
mod environment_variables;
