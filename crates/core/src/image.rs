//! Accepted image formats and the acquired-image payload.

/// MIME filter applied to the drop target / file picker.
pub const ACCEPT_MIME: &str = "image/png, image/jpeg";

/// Notice shown when a dropped file is accepted and decoded.
pub const MSG_DROP_ACCEPTED: &str = "Imagen cargada exitosamente";
/// Notice shown when a dropped file fails the extension check.
pub const MSG_DROP_REJECTED: &str = "La imagen no está en el formato seleccionado";
/// Notice shown when a webcam frame is captured.
pub const MSG_CAPTURE_ACCEPTED: &str = "Imagen tomada exitosamente";

/// Raster formats accepted from the file path. Webcam captures bypass this
/// check entirely; the browser guarantees the capture format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
}

impl ImageFormat {
    /// Classify a filename by the substring after its last `.`, matched
    /// case-insensitively against {png, jpeg, jpg}.
    ///
    /// The file content is never inspected; rejection happens before any
    /// read is started.
    pub fn from_filename(name: &str) -> Result<Self, FormatError> {
        let Some((_, ext)) = name.rsplit_once('.') else {
            return Err(FormatError::NoExtension);
        };
        match ext.to_ascii_lowercase().as_str() {
            "png" => Ok(ImageFormat::Png),
            "jpeg" | "jpg" => Ok(ImageFormat::Jpeg),
            other => Err(FormatError::Unsupported(other.to_string())),
        }
    }
}

/// Why a filename was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// No `.`-separated suffix at all.
    NoExtension,
    /// A suffix was present but is not in the allow-list.
    Unsupported(String),
}

impl std::fmt::Display for FormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatError::NoExtension => write!(f, "filename has no extension"),
            FormatError::Unsupported(ext) => {
                write!(f, "unsupported image extension: {:?}", ext)
            }
        }
    }
}

impl std::error::Error for FormatError {}

/// Which acquisition surface produced the current image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSource {
    Drop,
    Capture,
}

/// The currently accepted image: an encoded data URL plus its source tag.
/// Replaced wholesale on the next successful acquisition, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct AcquiredImage {
    pub data_url: String,
    pub source: ImageSource,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_allow_list_case_insensitive() {
        assert_eq!(ImageFormat::from_filename("photo.png"), Ok(ImageFormat::Png));
        assert_eq!(ImageFormat::from_filename("photo.PNG"), Ok(ImageFormat::Png));
        assert_eq!(ImageFormat::from_filename("photo.jpg"), Ok(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::from_filename("photo.JPG"), Ok(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::from_filename("photo.Jpeg"), Ok(ImageFormat::Jpeg));
    }

    #[test]
    fn only_the_last_extension_counts() {
        assert_eq!(
            ImageFormat::from_filename("a.b.c.png"),
            Ok(ImageFormat::Png)
        );
        assert_eq!(
            ImageFormat::from_filename("archive.tar.gz"),
            Err(FormatError::Unsupported("gz".to_string()))
        );
    }

    #[test]
    fn rejects_unsupported_and_missing_extensions() {
        assert_eq!(
            ImageFormat::from_filename("doc.pdf"),
            Err(FormatError::Unsupported("pdf".to_string()))
        );
        assert_eq!(
            ImageFormat::from_filename("noext"),
            Err(FormatError::NoExtension)
        );
        assert_eq!(
            ImageFormat::from_filename("trailing."),
            Err(FormatError::Unsupported(String::new()))
        );
        assert_eq!(
            ImageFormat::from_filename(".gitignore"),
            Err(FormatError::Unsupported("gitignore".to_string()))
        );
    }
}
