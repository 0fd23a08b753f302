use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateProfileRequest {
    pub name: String,
}

/// Query parameters for the profile listing. `prefix` may be repeated; the
/// occurrences are concatenated in order before matching.
#[derive(Debug, Default, Deserialize)]
pub struct ProfileListParams {
    #[serde(default)]
    pub prefix: Vec<String>,
}

impl ProfileListParams {
    pub fn prefix(&self) -> Option<String> {
        let joined = self.prefix.concat();
        if joined.is_empty() { None } else { Some(joined) }
    }
}
