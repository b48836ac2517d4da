pub mod fixed;
pub mod forest;
