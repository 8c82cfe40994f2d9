use std::path::{Path, PathBuf};

/// Server configuration
///
/// # Environment variables
///
/// Every field can be overridden from the environment (a `.env` file is
/// loaded first):
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | HTTP_PORT | 3001 | HTTP listen port |
/// | DOC_ROOT | . | Static site root, also the base of the paths below |
/// | DATA_FILE | data/products.json | Catalog document |
/// | UPLOAD_DIR | assets/images | Uploaded images (also the returned path prefix) |
/// | MAX_BODY_BYTES | 52428800 | Request body limit (50 MiB) |
/// | REQUEST_TIMEOUT_MS | 30000 | Request timeout (ms) |
/// | ENVIRONMENT | development | development / staging / production |
///
/// # Example
///
/// ```ignore
/// DOC_ROOT=/srv/safetytech HTTP_PORT=8080 cargo run -p catalog-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API port
    pub http_port: u16,
    /// Directory served as the static site
    pub doc_root: PathBuf,
    /// Catalog document, relative paths resolve against `doc_root`
    pub data_file: PathBuf,
    /// Upload directory relative to `doc_root`, with `/` separators
    pub upload_dir: String,
    /// Request body limit in bytes
    pub max_body_bytes: usize,
    /// Request timeout (ms)
    pub request_timeout_ms: u64,
    /// development | staging | production
    pub environment: String,
}

/// Default HTTP port, same as the original node server
pub const DEFAULT_HTTP_PORT: u16 = 3001;
/// 50 MiB, the JSON body limit the site was built against
pub const DEFAULT_MAX_BODY_BYTES: usize = 50 * 1024 * 1024;

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset or unparsable variables fall back to the defaults.
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_HTTP_PORT),
            doc_root: std::env::var("DOC_ROOT")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),
            data_file: std::env::var("DATA_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data/products.json")),
            upload_dir: std::env::var("UPLOAD_DIR")
                .map(|dir| normalize_upload_dir(&dir))
                .unwrap_or_else(|_| "assets/images".into()),
            max_body_bytes: std::env::var("MAX_BODY_BYTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_BODY_BYTES),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Override the filesystem layout and port
    ///
    /// Used by tests to point the server at a temporary directory.
    pub fn with_overrides(doc_root: impl Into<PathBuf>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.doc_root = doc_root.into();
        config.http_port = http_port;
        config.data_file = PathBuf::from("data/products.json");
        config.upload_dir = "assets/images".into();
        config
    }

    /// Absolute (or cwd-relative) location of the catalog document
    pub fn data_file_path(&self) -> PathBuf {
        resolve(&self.doc_root, &self.data_file)
    }

    /// Filesystem directory receiving uploads
    pub fn upload_dir_path(&self) -> PathBuf {
        resolve(&self.doc_root, Path::new(&self.upload_dir))
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

/// `\` to `/`, no leading `./`, no trailing `/`
fn normalize_upload_dir(dir: &str) -> String {
    let dir = dir.replace('\\', "/");
    let dir = dir.strip_prefix("./").unwrap_or(&dir);
    dir.trim_end_matches('/').to_string()
}
