// Domain layer: core models and ports (interfaces). No knowledge of HTTP or SQL.

pub mod model;
pub mod ports;
