use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use harvest_logging::harvest_warn;

/// Decodes the driver page into UTF-8 text.
///
/// Encoding is picked from the byte-order mark, then the `charset` parameter
/// of the Content-Type header, then `chardetng` sniffing. Undecodable bytes
/// become U+FFFD.
pub fn decode_page(bytes: &[u8], content_type: Option<&str>) -> String {
    let encoding = Encoding::for_bom(bytes)
        .map(|(encoding, _)| encoding)
        .or_else(|| {
            content_type
                .and_then(charset_param)
                .and_then(|label| Encoding::for_label(label.as_bytes()))
        })
        .unwrap_or_else(|| {
            let mut detector = EncodingDetector::new();
            detector.feed(bytes, true);
            detector.guess(None, true)
        });

    let (text, _, had_errors) = encoding.decode(bytes);
    if had_errors {
        harvest_warn!(
            "Page contains bytes that are not valid {}; replaced them",
            encoding.name()
        );
    }
    text.into_owned()
}

fn charset_param(content_type: &str) -> Option<&str> {
    content_type.split(';').skip(1).find_map(|param| {
        let (name, value) = param.split_once('=')?;
        name.trim()
            .eq_ignore_ascii_case("charset")
            .then(|| value.trim().trim_matches(['"', '\''].as_ref()))
    })
}
