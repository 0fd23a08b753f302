use crate::models::Profile;
use futures::stream::TryStreamExt;
use mongodb::{bson::doc, Collection};
use service_core::error::AppError;

/// Record-model operations on the "profiles" collection.
///
/// Both create-id policies are separate named operations: `create` lets the
/// store generate the identifier, `create_with_id` takes a caller-supplied
/// one and fails on a duplicate.
#[derive(Clone)]
pub struct ProfileStore {
    collection: Collection<Profile>,
}

impl ProfileStore {
    pub fn new(collection: Collection<Profile>) -> Self {
        Self { collection }
    }

    /// Absence is a normal outcome, not an error.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Profile>, AppError> {
        Ok(self.collection.find_one(doc! { "_id": id }, None).await?)
    }

    pub async fn create(&self, name: String) -> Result<Profile, AppError> {
        let profile = Profile::new(name);
        self.collection.insert_one(&profile, None).await?;
        Ok(profile)
    }

    /// A duplicate identifier surfaces the driver's duplicate-key write
    /// error; the existing record is left unmodified.
    pub async fn create_with_id(&self, id: String, name: String) -> Result<Profile, AppError> {
        let profile = Profile::with_id(id, name);
        self.collection.insert_one(&profile, None).await?;
        Ok(profile)
    }

    /// Lists profiles, optionally restricted to identifiers starting with
    /// `prefix`. Order is whatever the cursor yields; no re-sort.
    pub async fn find(&self, prefix: Option<&str>) -> Result<Vec<Profile>, AppError> {
        let filter = match prefix {
            Some(prefix) => doc! { "_id": { "$regex": anchored_prefix_pattern(prefix) } },
            None => doc! {},
        };

        let mut cursor = self.collection.find(filter, None).await?;
        let mut profiles = Vec::new();
        while let Some(profile) = cursor.try_next().await? {
            profiles.push(profile);
        }
        Ok(profiles)
    }

    /// Deleting a missing id is a silent success.
    pub async fn delete_by_id(&self, id: &str) -> Result<(), AppError> {
        self.collection.delete_one(doc! { "_id": id }, None).await?;
        Ok(())
    }
}

/// Anchored, case-sensitive pattern matching identifiers that start with the
/// literal `prefix`. Metacharacters are escaped so user input cannot widen
/// the match.
fn anchored_prefix_pattern(prefix: &str) -> String {
    format!("^{}", regex::escape(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchored_prefix_pattern() {
        assert_eq!(anchored_prefix_pattern("ab"), "^ab");
    }

    #[test]
    fn test_anchored_prefix_pattern_escapes_metacharacters() {
        assert_eq!(anchored_prefix_pattern("a.c"), "^a\\.c");
        assert_eq!(anchored_prefix_pattern("a*"), "^a\\*");
        assert_eq!(anchored_prefix_pattern("a|b"), "^a\\|b");
    }

    #[test]
    fn test_anchored_prefix_pattern_empty() {
        assert_eq!(anchored_prefix_pattern(""), "^");
    }
}
