//! Remote license fallback.
//!
//! When a package has a homepage but no license text was found in the scan
//! tree, probe a fixed list of candidate GitHub raw-content URLs and take
//! the first 200 response as authoritative. No retries, no timeout policy
//! beyond the HTTP client's defaults; callers needing resilience must wrap
//! their own.

#![forbid(unsafe_code)]

pub const RAW_GITHUB_BASE_URL: &str = "https://raw.githubusercontent.com";

/// Minimal view of an HTTP response: status code and body text.
pub struct ProbeResponse {
    pub status: u16,
    pub body: String,
}

/// Transport seam for candidate probing, so tests can fake the network.
pub trait LicenseProbe {
    fn get(&self, url: &str) -> anyhow::Result<ProbeResponse>;
}

/// Blocking reqwest transport.
#[derive(Default)]
pub struct HttpProbe {
    client: reqwest::blocking::Client,
}

impl HttpProbe {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LicenseProbe for HttpProbe {
    fn get(&self, url: &str) -> anyhow::Result<ProbeResponse> {
        let response = self.client.get(url).send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        Ok(ProbeResponse { status, body })
    }
}

/// A license text fetched from a candidate URL.
pub struct RemoteLicense {
    pub url: String,
    pub content: String,
}

/// The eight candidate URLs, in fixed priority order:
/// `{derived project path, package key} x {master, main} x {LICENSE, LICENSE.txt}`.
///
/// The project path is derived from a GitHub-hosted homepage by joining the
/// URL segments after the host; a non-GitHub homepage derives the empty
/// path (those candidates simply miss).
pub fn candidate_license_urls(homepage_url: &str, package_key: &str) -> Vec<String> {
    let project = if homepage_url.contains("github") {
        homepage_url
            .split('/')
            .skip(3)
            .collect::<Vec<_>>()
            .join("/")
    } else {
        String::new()
    };

    let mut urls = Vec::with_capacity(8);
    for path in [project.as_str(), package_key] {
        for branch in ["master", "main"] {
            for file in ["LICENSE", "LICENSE.txt"] {
                urls.push(format!("{RAW_GITHUB_BASE_URL}/{path}/{branch}/{file}"));
            }
        }
    }
    urls
}

/// Probe the candidates in order, short-circuiting on the first 200.
///
/// Misses (non-200 and transport errors alike) are reported to stdout and
/// the next candidate tried; exhausting the list returns `None` and the
/// caller leaves the package without license content.
pub fn resolve_license(
    probe: &dyn LicenseProbe,
    homepage_url: &str,
    package_key: &str,
) -> Option<RemoteLicense> {
    for url in candidate_license_urls(homepage_url, package_key) {
        match probe.get(&url) {
            Ok(response) if response.status == 200 => {
                return Some(RemoteLicense {
                    url,
                    content: response.body,
                });
            }
            Ok(_) => println!("License could not be found at: {url}"),
            Err(err) => println!("License lookup failed at {url}: {err:#}"),
        }
    }
    None
}
