pub mod frame_data;
pub mod render_job;
