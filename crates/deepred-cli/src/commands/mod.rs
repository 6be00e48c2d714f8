pub mod predict;
pub mod sort;
