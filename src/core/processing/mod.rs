pub mod padding;
pub mod resize;
pub mod square;
