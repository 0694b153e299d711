//! HTTP GET over libcurl (via the `curl` crate).
//!
//! `HttpGet` is the seam the staleness checker and installer talk to;
//! `CurlClient` is the real implementation. Calls block the current thread;
//! run them from `spawn_blocking` when used from async code.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Failure of a single GET. Never retried.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Curl reported an error (DNS, connect, timeout, TLS, ...).
    #[error("GET {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: curl::Error,
    },
    /// Response had a non-2xx status.
    #[error("GET {url} returned HTTP {code}")]
    Status { url: String, code: u32 },
    /// Body was expected to be text but is not valid UTF-8.
    #[error("GET {url}: response body is not UTF-8")]
    Body { url: String },
    /// Writing the body to disk failed.
    #[error("writing {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Blocking HTTP GET primitive.
pub trait HttpGet {
    /// GET `url` and return the body as UTF-8 text.
    fn get_text(&self, url: &str) -> Result<String, FetchError>;

    /// GET `url` and write the body to `dest` (created or truncated).
    /// Returns the number of bytes written.
    fn get_to_file(&self, url: &str, dest: &Path) -> Result<u64, FetchError>;
}

/// Connection and total-request timeouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpOptions {
    pub connect_timeout: Duration,
    pub timeout: Duration,
}

impl Default for HttpOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(15),
            timeout: Duration::from_secs(60),
        }
    }
}

/// libcurl-backed client. One Easy handle per request.
#[derive(Debug, Clone, Default)]
pub struct CurlClient {
    opts: HttpOptions,
}

impl CurlClient {
    pub fn new(opts: HttpOptions) -> Self {
        Self { opts }
    }

    fn easy(&self, url: &str) -> Result<curl::easy::Easy, FetchError> {
        let transport = |source| FetchError::Transport {
            url: url.to_string(),
            source,
        };
        let mut easy = curl::easy::Easy::new();
        easy.url(url).map_err(transport)?;
        easy.follow_location(true).map_err(transport)?;
        easy.max_redirections(10).map_err(transport)?;
        easy.connect_timeout(self.opts.connect_timeout)
            .map_err(transport)?;
        easy.timeout(self.opts.timeout).map_err(transport)?;
        Ok(easy)
    }
}

fn check_status(easy: &mut curl::easy::Easy, url: &str) -> Result<(), FetchError> {
    let code = easy.response_code().map_err(|source| FetchError::Transport {
        url: url.to_string(),
        source,
    })?;
    if !(200..300).contains(&code) {
        return Err(FetchError::Status {
            url: url.to_string(),
            code,
        });
    }
    Ok(())
}

impl HttpGet for CurlClient {
    fn get_text(&self, url: &str) -> Result<String, FetchError> {
        let transport = |source| FetchError::Transport {
            url: url.to_string(),
            source,
        };
        let mut easy = self.easy(url)?;
        let mut body = Vec::new();
        {
            let mut transfer = easy.transfer();
            transfer
                .write_function(|data| {
                    body.extend_from_slice(data);
                    Ok(data.len())
                })
                .map_err(transport)?;
            transfer.perform().map_err(transport)?;
        }
        check_status(&mut easy, url)?;
        tracing::debug!(url, bytes = body.len(), "GET text complete");
        String::from_utf8(body).map_err(|_| FetchError::Body {
            url: url.to_string(),
        })
    }

    fn get_to_file(&self, url: &str, dest: &Path) -> Result<u64, FetchError> {
        let io_err = |source| FetchError::Io {
            path: dest.to_path_buf(),
            source,
        };
        let transport = |source| FetchError::Transport {
            url: url.to_string(),
            source,
        };
        let mut file = File::create(dest).map_err(io_err)?;
        let mut easy = self.easy(url)?;
        let mut written = 0u64;
        let mut write_failure: Option<io::Error> = None;
        let performed = {
            let mut transfer = easy.transfer();
            transfer
                .write_function(|data| match file.write_all(data) {
                    Ok(()) => {
                        written += data.len() as u64;
                        Ok(data.len())
                    }
                    Err(e) => {
                        tracing::warn!("sticker write failed: {}", e);
                        write_failure = Some(e);
                        Ok(0) // abort transfer
                    }
                })
                .map_err(transport)?;
            transfer.perform()
        };
        // A short write makes curl fail too; report the disk error, not curl's.
        if let Some(e) = write_failure {
            return Err(io_err(e));
        }
        performed.map_err(transport)?;
        check_status(&mut easy, url)?;
        file.sync_all().map_err(io_err)?;
        Ok(written)
    }
}
