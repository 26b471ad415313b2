use reqwest::header::HeaderValue;
use url::Url;

use crate::errors::Result;
use crate::profile::Profile;

pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";

const AVATAR_URL_TEMPLATE: &str = "https://avatars.dicebear.com/v2/avataaars";

/// Source of the directory collection.
///
/// A load either produces the complete collection or fails; it must
/// never hide a failure behind an empty result.
pub trait ProfileSource {
    fn load(&self) -> Result<Vec<Profile>>;
}

/// HTTP client for the remote directory endpoint.
pub struct DirectoryClient {
    endpoint: Url,
    client: reqwest::Client,
}

impl DirectoryClient {
    pub fn new(endpoint: Url) -> Result<Self> {
        let mut header = reqwest::header::HeaderMap::new();
        header.insert(
            "User-Agent",
            HeaderValue::from_static(
                "Mozilla/5.0 (X11; Linux x86_64; rv:102.0) Gecko/20100101 Firefox/102.0",
            ),
        );
        let client = reqwest::Client::builder()
            .default_headers(header)
            .build()?;

        Ok(Self { endpoint, client })
    }

    pub fn with_default_endpoint() -> Result<Self> {
        let endpoint = Url::parse(DEFAULT_ENDPOINT)
            .map_err(|_| crate::errors::DirectoryError::Parse)?;
        Self::new(endpoint)
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetch the full profile collection.
    ///
    /// A non-2xx status or transport failure fails the whole load;
    /// no partial collection is ever returned. Every record comes
    /// back with `liked` reset to `false`.
    pub async fn fetch_profiles(&self) -> Result<Vec<Profile>> {
        log::debug!("Fetching profiles from {}", self.endpoint);

        let response = self
            .client
            .get(self.endpoint.clone())
            .send()
            .await?
            .error_for_status()?;

        let mut profiles: Vec<Profile> = response.json().await?;
        for profile in profiles.iter_mut() {
            profile.liked = false;
        }

        log::info!("Fetched {} profiles", profiles.len());
        Ok(profiles)
    }

    /// Synchronized version of [`DirectoryClient::fetch_profiles`].
    pub fn fetch_profiles_sync(&self) -> Result<Vec<Profile>> {
        let runtime = tokio::runtime::Runtime::new()?;
        runtime.block_on(self.fetch_profiles())
    }
}

impl ProfileSource for DirectoryClient {
    fn load(&self) -> Result<Vec<Profile>> {
        self.fetch_profiles_sync()
    }
}

/// Derive the avatar image URL for a username.
///
/// Pure string templating; the resulting URL is not checked
/// against the image service.
pub fn avatar_url(username: &str) -> String {
    format!("{}/{}.svg?options[mood][]=happy", AVATAR_URL_TEMPLATE, username)
}
