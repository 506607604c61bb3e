//! Decode and re-encode.

use bytes::Bytes;
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat, ImageReader};
use medialift_core::{EncodePolicy, IngestError, TargetFormat};
use std::io::Cursor;

/// Decode an image from raw bytes, sniffing the actual format.
///
/// The declared content type is not trusted here; a mislabeled or malformed
/// payload fails with [`IngestError::Decode`].
pub fn decode(data: &[u8]) -> Result<DynamicImage, IngestError> {
    let reader = ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .map_err(|e| IngestError::Decode(e.to_string()))?;
    reader
        .decode()
        .map_err(|e| IngestError::Decode(e.to_string()))
}

/// Re-encode a decoded image per the policy.
///
/// JPEG output drops the alpha channel; transparency is not preserved.
pub fn encode(img: &DynamicImage, policy: &EncodePolicy) -> Result<Bytes, IngestError> {
    let mut buffer = Vec::new();
    match policy.format {
        TargetFormat::Jpeg => {
            let rgb = img.to_rgb8();
            let encoder = JpegEncoder::new_with_quality(&mut buffer, policy.quality);
            rgb.write_with_encoder(encoder)
                .map_err(|e| IngestError::Encode(e.to_string()))?;
        }
        TargetFormat::Png => {
            img.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
                .map_err(|e| IngestError::Encode(e.to_string()))?;
        }
    }
    Ok(Bytes::from(buffer))
}
