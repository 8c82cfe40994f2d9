//! Uploaded image storage
//!
//! Files are stored as `<unix-millis>-<nonce><.ext>` under the upload
//! directory, where the nonce is drawn from `0..=1_000_000_000`.

use std::path::{Path, PathBuf};

use rand::Rng;

/// Upper bound (inclusive) of the random file name component
pub const NONCE_MAX: u32 = 1_000_000_000;

/// Upload directory
#[derive(Debug, Clone)]
pub struct ImageStore {
    /// Filesystem location
    dir: PathBuf,
    /// Prefix of the returned paths, relative to the document root
    public_prefix: String,
}

impl ImageStore {
    pub fn new(dir: impl Into<PathBuf>, public_prefix: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            public_prefix: public_prefix.into(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Store `data` under a freshly generated name
    ///
    /// Returns the document-root relative path with `/` separators.
    /// Name collisions inside one millisecond are not checked.
    pub async fn save(&self, original_name: &str, data: &[u8]) -> std::io::Result<String> {
        tokio::fs::create_dir_all(&self.dir).await?;

        let millis = chrono::Utc::now().timestamp_millis();
        let nonce = rand::thread_rng().gen_range(0..=NONCE_MAX);
        let file_name = generate_file_name(original_name, millis, nonce);

        tokio::fs::write(self.dir.join(&file_name), data).await?;

        Ok(self.public_path(&file_name))
    }

    fn public_path(&self, file_name: &str) -> String {
        if self.public_prefix.is_empty() {
            file_name.to_string()
        } else {
            format!("{}/{}", self.public_prefix, file_name)
        }
    }
}

/// `<millis>-<nonce><.ext>`
///
/// The extension keeps its dot and its case. Anything that is not plain
/// ASCII alphanumeric is dropped so a client-supplied name can never
/// contribute path separators.
pub fn generate_file_name(original_name: &str, millis: i64, nonce: u32) -> String {
    format!("{}-{}{}", millis, nonce, extension_of(original_name))
}

fn extension_of(original_name: &str) -> String {
    // Browsers on Windows may send the full client path
    let base = original_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(original_name);

    Path::new(base)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(|ext| format!(".{ext}"))
        .unwrap_or_default()
}
