// Domain layer: 規則記錄模型與對外部程式的 port (trait)。

pub mod model;
pub mod ports;
