pub mod events;
pub mod normalizer;
pub mod sweep;
