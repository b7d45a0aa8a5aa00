// Domain layer - Core types and naming rules

pub mod model;
pub mod rules;
