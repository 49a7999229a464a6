/// Application layer - Use cases and DTOs
///
/// This layer orchestrates the domain services and talks to the outside
/// world only through ports.
pub mod dto;
pub mod use_cases;
pub mod working_clone;
