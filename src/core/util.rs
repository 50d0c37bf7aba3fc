//! Small shared helpers: key obfuscation, byte formatting, timestamps.

use chrono::Utc;

use crate::core::constants::DEMO_KEY;

/// Renders an API key as `ab...yz` for logs. The public demo key is left
/// as-is.
pub(crate) fn obfuscate_api_key(api_key: &str) -> String {
    if api_key == DEMO_KEY {
        return api_key.to_owned();
    }
    if !api_key.is_ascii() || api_key.len() < 4 {
        return "...".to_owned();
    }
    format!("{}...{}", &api_key[..2], &api_key[api_key.len() - 2..])
}

/// Replaces the trailing `apikey` query argument with its obfuscated form.
pub(crate) fn obfuscate_request_url(request_url: &str, api_key: &str) -> String {
    let first_part = request_url
        .split("&apikey=")
        .next()
        .unwrap_or(request_url);
    format!("{first_part}&apikey={}", obfuscate_api_key(api_key))
}

pub(crate) fn format_byte_size(n_bytes: usize) -> String {
    const KIB: f64 = 1024.0;
    let n = n_bytes as f64;
    if n >= KIB * KIB * KIB {
        format!("{:.2} GByte", n / (KIB * KIB * KIB))
    } else if n >= KIB * KIB {
        format!("{:.2} MByte", n / (KIB * KIB))
    } else if n >= KIB {
        format!("{:.2} KByte", n / KIB)
    } else {
        format!("{n_bytes} Byte")
    }
}

/// Milliseconds since the Unix epoch, UTC. Used for archive file names.
pub(crate) fn utc_timestamp_ms() -> i64 {
    Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_key_is_not_obfuscated() {
        assert_eq!(obfuscate_api_key("demo"), "demo");
    }

    #[test]
    fn real_keys_keep_first_and_last_two_chars() {
        assert_eq!(obfuscate_api_key("ABCDEF123456"), "AB...56");
    }

    #[test]
    fn degenerate_keys_are_fully_hidden() {
        assert_eq!(obfuscate_api_key("abc"), "...");
    }

    #[test]
    fn url_obfuscation_only_touches_the_key() {
        let url = "https://host/query?function=F&symbol=IBM&apikey=ABCDEF123456";
        assert_eq!(
            obfuscate_request_url(url, "ABCDEF123456"),
            "https://host/query?function=F&symbol=IBM&apikey=AB...56"
        );
    }

    #[test]
    fn byte_sizes_scale_units() {
        assert_eq!(format_byte_size(512), "512 Byte");
        assert_eq!(format_byte_size(2048), "2.00 KByte");
        assert_eq!(format_byte_size(3 * 1024 * 1024), "3.00 MByte");
    }
}
