pub mod profiles;

pub use profiles::{CreateProfileRequest, ProfileListParams};
