// src/numerics/mod.rs
// Top-level numerics module. Exposes a `types` namespace with submodules.

pub mod tolerance;

pub mod types {
    // The submodules live in src/numerics/types/*.rs
    pub mod parse;
    pub mod point;
    pub mod traits;
    pub mod vector;
}
