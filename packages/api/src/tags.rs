//! `/tags` endpoints.

use serde::{Deserialize, Serialize};
use store::Credential;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{lenient, Tag};
use crate::transport::{ApiRequest, Transport};

#[derive(Deserialize)]
struct TagList {
    #[serde(deserialize_with = "lenient::list_or_empty")]
    tags: Vec<Tag>,
}

#[derive(Deserialize)]
struct SingleTag {
    tag: Tag,
}

#[derive(Serialize)]
struct TagName<'a> {
    name: &'a str,
}

impl<T: Transport> ApiClient<T> {
    pub async fn list_tags(&self, credential: Option<&Credential>) -> Result<Vec<Tag>, ApiError> {
        let request = ApiRequest::get("/tags").bearer(credential);
        Ok(self.fetch::<TagList>(request).await?.tags)
    }

    pub async fn create_tag(
        &self,
        credential: Option<&Credential>,
        name: &str,
    ) -> Result<Tag, ApiError> {
        let request = ApiRequest::post("/tags")
            .json(&TagName { name })?
            .bearer(credential);
        Ok(self.fetch::<SingleTag>(request).await?.tag)
    }
}
