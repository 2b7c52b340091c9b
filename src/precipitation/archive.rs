use crate::precipitation::error::PrecipitationError;
use crate::transport::decode_text;
use log::debug;
use std::io::{Cursor, Read};
use zip::ZipArchive;

/// Opens a downloaded station archive and returns the text of its product file,
/// the first entry whose name starts with `product_prefix`.
///
/// `url` is only used to give errors some context.
pub fn read_product_file(
    bytes: &[u8],
    product_prefix: &str,
    url: &str,
) -> Result<String, PrecipitationError> {
    let mut archive =
        ZipArchive::new(Cursor::new(bytes)).map_err(|e| PrecipitationError::ZipOpen {
            url: url.to_string(),
            source: e,
        })?;

    let Some(name) = archive
        .file_names()
        .find(|name| name.starts_with(product_prefix))
        .map(str::to_owned)
    else {
        return Err(PrecipitationError::NoProductFile {
            url: url.to_string(),
            prefix: product_prefix.to_string(),
            entries: archive.file_names().map(str::to_owned).collect(),
        });
    };

    let mut entry = archive
        .by_name(&name)
        .map_err(|e| PrecipitationError::ZipEntry {
            url: url.to_string(),
            name: name.clone(),
            source: e,
        })?;
    let mut content = Vec::new();
    entry
        .read_to_end(&mut content)
        .map_err(|e| PrecipitationError::ProductRead {
            url: url.to_string(),
            name: name.clone(),
            source: e,
        })?;
    debug!("Read {} bytes from {} in {}", content.len(), name, url);
    Ok(decode_text(content))
}
