/// Domain layer: graph model, SPDX model and the projection services
pub mod domain;
pub mod policies;
pub mod services;
