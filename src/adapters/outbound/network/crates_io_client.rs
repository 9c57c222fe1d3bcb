use crate::ports::outbound::RegistryClient;
use crate::shared::error::DepOrderError;
use crate::shared::Result;
use serde::Deserialize;
use std::time::Duration;

/// Default registry API: crates.io
pub const DEFAULT_REGISTRY_URL: &str = "https://crates.io/api/v1/crates";

/// Only edges of this kind are runtime dependencies
const NORMAL_KIND: &str = "normal";

#[derive(Debug, Deserialize)]
struct DependenciesResponse {
    #[serde(default)]
    dependencies: Vec<RegistryDependency>,
}

#[derive(Debug, Deserialize)]
struct RegistryDependency {
    crate_id: String,
    #[serde(default)]
    kind: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CrateResponse {
    #[serde(rename = "crate")]
    krate: CrateInfo,
}

#[derive(Debug, Deserialize)]
struct CrateInfo {
    #[serde(default)]
    max_stable_version: Option<String>,
    #[serde(default)]
    max_version: Option<String>,
}

/// CratesIoClient adapter for the crates.io-style registry API
///
/// Implements the RegistryClient port with a blocking reqwest client:
/// - `GET {base}/{name}` for the newest version
/// - `GET {base}/{name}/{version}/dependencies` for direct dependencies
pub struct CratesIoClient {
    client: reqwest::blocking::Client,
    base_url: String,
    max_retries: u32,
}

impl CratesIoClient {
    /// Creates a client for `base_url` (trailing slashes are ignored)
    pub fn new(base_url: &str) -> Result<Self> {
        let user_agent = format!("deporder/{}", env!("CARGO_PKG_VERSION"));
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            max_retries: 3,
        })
    }

    /// Overrides the number of attempts per request (minimum 1)
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries.max(1);
        self
    }

    /// Rejects URL components that could escape the intended endpoint
    fn validate_url_component(component: &str, component_type: &str) -> Result<()> {
        if component.is_empty() {
            anyhow::bail!("{} must not be empty", component_type);
        }

        if component.contains('/') || component.contains('\\') {
            anyhow::bail!(
                "Security: {} contains path separators which are not allowed",
                component_type
            );
        }

        if component.contains("..") {
            anyhow::bail!(
                "Security: {} contains '..' which is not allowed",
                component_type
            );
        }

        if component.contains('#') || component.contains('?') || component.contains('@') {
            anyhow::bail!(
                "Security: {} contains URL-unsafe characters",
                component_type
            );
        }

        Ok(())
    }

    fn crate_url(&self, package_name: &str) -> Result<String> {
        Self::validate_url_component(package_name, "Package name")?;
        Ok(format!(
            "{}/{}",
            self.base_url,
            urlencoding::encode(package_name)
        ))
    }

    fn dependencies_url(&self, package_name: &str, version: &str) -> Result<String> {
        Self::validate_url_component(version, "Version")?;
        Ok(format!(
            "{}/{}/dependencies",
            self.crate_url(package_name)?,
            urlencoding::encode(version)
        ))
    }

    /// GETs `url` and decodes the JSON body, retrying with a linear backoff
    fn get_json<T: serde::de::DeserializeOwned>(&self, package_name: &str, url: &str) -> Result<T> {
        let mut last_error = None;

        for attempt in 1..=self.max_retries {
            match self.get_json_once(url) {
                Ok(body) => return Ok(body),
                Err(e) => {
                    last_error = Some(e);
                    if attempt < self.max_retries {
                        std::thread::sleep(Duration::from_millis(100 * attempt as u64));
                    }
                }
            }
        }

        let details = last_error
            .map(|e| e.to_string())
            .unwrap_or_else(|| "no attempt was made".to_string());
        Err(DepOrderError::RegistryError {
            package: package_name.to_string(),
            details,
        }
        .into())
    }

    fn get_json_once<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.client.get(url).send()?;

        if !response.status().is_success() {
            anyhow::bail!("Registry returned status code {} for {}", response.status(), url);
        }

        Ok(response.json()?)
    }
}

/// Keeps the identifiers of "normal" edges, in response order
fn normal_dependency_names(response: DependenciesResponse) -> Vec<String> {
    response
        .dependencies
        .into_iter()
        .filter(|dep| dep.kind.as_deref() == Some(NORMAL_KIND))
        .map(|dep| dep.crate_id)
        .collect()
}

impl RegistryClient for CratesIoClient {
    fn registry_url(&self) -> &str {
        &self.base_url
    }

    fn latest_version(&self, package_name: &str) -> Result<String> {
        let url = self.crate_url(package_name)?;
        let response: CrateResponse = self.get_json(package_name, &url)?;

        response
            .krate
            .max_stable_version
            .or(response.krate.max_version)
            .ok_or_else(|| {
                DepOrderError::RegistryError {
                    package: package_name.to_string(),
                    details: "Registry response has no published version".to_string(),
                }
                .into()
            })
    }

    fn direct_dependencies(&self, package_name: &str, version: &str) -> Result<Vec<String>> {
        let url = self.dependencies_url(package_name, version)?;
        let response: DependenciesResponse = self.get_json(package_name, &url)?;
        Ok(normal_dependency_names(response))
    }
}
