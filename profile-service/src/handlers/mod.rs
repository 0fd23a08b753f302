pub mod health;
pub mod profiles;

pub use health::health_check;
pub use profiles::{
    create_profile, create_profile_with_id, delete_profile, get_profile, list_profiles,
};
