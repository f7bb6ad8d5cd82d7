//! Theme for Usuarios

mod styles;

pub use styles::GLOBAL_STYLES;
