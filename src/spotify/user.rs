use super::{CatalogError, CatalogSession};
use crate::types::UserProfile;

impl CatalogSession {
    /// Profile of the user the credential belongs to.
    pub async fn current_user(&mut self) -> Result<UserProfile, CatalogError> {
        let token = self.access_token().await?;
        let request = self
            .catalog
            .http
            .get(self.catalog.endpoint("me"))
            .bearer_auth(token);

        let response = self.catalog.send(request).await?;
        Ok(response.json::<UserProfile>().await?)
    }
}
