//! Best-effort console encoding for skim output.
//!
//! Terminal encodings vary across environments, and a skim must never fail
//! just because a page contains a character the terminal cannot show. Output
//! headed for the console is checked against the terminal's expected encoding
//! and, when needed, re-rendered with unrepresentable characters dropped.

use std::borrow::Cow;
use std::env;

use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};

/// Locale variables consulted for the terminal's codeset, in precedence order.
const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_CTYPE", "LANG"];

/// Resolve the encoding the console is expected to accept.
///
/// Reads the codeset suffix of the usual locale variables (e.g. the `UTF-8`
/// in `en_US.UTF-8`). When no variable names a recognizable codeset, falls
/// back to windows-1252 as the legacy single-byte default.
pub fn console_encoding() -> &'static Encoding {
    for var in LOCALE_VARS {
        if let Ok(value) = env::var(var) {
            if let Some(encoding) = encoding_from_locale(&value) {
                return encoding;
            }
        }
    }
    WINDOWS_1252
}

/// Parse a locale string like `en_US.UTF-8` or `de_DE.ISO-8859-1@euro`
/// into an encoding. Locales without a codeset (`C`, `POSIX`) yield `None`.
pub fn encoding_from_locale(locale: &str) -> Option<&'static Encoding> {
    let codeset = locale.split('.').nth(1)?;
    let codeset = codeset.split('@').next().unwrap_or(codeset);
    Encoding::for_label(codeset.as_bytes())
}

/// Make `text` safe to write to a console using `encoding`.
///
/// The happy path is a pure encodability check that borrows the input. Only
/// when the text contains characters the target encoding cannot represent is
/// a new string built, with those characters silently dropped. Output length
/// may shrink; the run still succeeds.
pub fn render_for_console<'a>(text: &'a str, encoding: &'static Encoding) -> Cow<'a, str> {
    // Rust strings are already UTF-8
    if encoding == UTF_8 {
        return Cow::Borrowed(text);
    }

    let (_, _, had_unmappable) = encoding.encode(text);
    if !had_unmappable {
        return Cow::Borrowed(text);
    }

    let mut buf = [0u8; 4];
    let kept: String = text
        .chars()
        .filter(|&c| {
            let (_, _, unmappable) = encoding.encode(c.encode_utf8(&mut buf));
            !unmappable
        })
        .collect();
    Cow::Owned(kept)
}
