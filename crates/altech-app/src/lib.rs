// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub mod filter;
pub mod ids;
pub mod lightbox;
pub mod model;
pub mod state;

pub use filter::*;
pub use ids::*;
pub use lightbox::*;
pub use model::*;
pub use state::*;
