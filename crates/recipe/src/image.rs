use base64::{Engine, engine::general_purpose::STANDARD};
use std::path::Path;

/// Reads an image file into a `data:` URI suitable for the `image` field.
pub async fn data_uri(path: impl AsRef<Path>) -> recipebox_shared::Result<String> {
    let path = path.as_ref();
    let mime = mime_guess::from_path(path).first_or_octet_stream();

    if mime.type_() != mime_guess::mime::IMAGE {
        recipebox_shared::bail!("{} is not an image ({mime})", path.display());
    }

    let bytes = tokio::fs::read(path).await?;
    tracing::debug!(path = %path.display(), size = bytes.len(), "image loaded");

    Ok(format!("data:{mime};base64,{}", STANDARD.encode(bytes)))
}
