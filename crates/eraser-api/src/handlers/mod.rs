pub mod clean;
pub mod health;
pub mod landing;
pub mod not_found;
