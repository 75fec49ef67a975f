pub mod data;
pub mod explorer;
pub mod ports;
pub mod render_worker;
pub mod snapshot;
