// src/config/mod.rs

pub mod rules;
pub mod saves;

pub use saves::SaveConfig;
