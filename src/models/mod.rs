pub mod diffusion;
pub mod log_price;
