//! Small browser interop helpers run through `document::eval`.

use dioxus::prelude::*;

/// Escape a string so it's safe to embed inside a JS string literal (double-quoted).
pub fn js_string_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c if c < '\x20' => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Write `text` to the clipboard. Resolves to whether the browser accepted it.
pub async fn copy_to_clipboard(text: &str) -> bool {
    let js = format!(
        r#"navigator.clipboard.writeText({text_js})
            .then(function() {{ dioxus.send(true); }})
            .catch(function() {{ dioxus.send(false); }});"#,
        text_js = js_string_escape(text),
    );
    let mut eval = document::eval(&js);
    matches!(eval.recv::<bool>().await, Ok(true))
}

/// Full page reload.
pub fn reload_page() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_string_escape() {
        assert_eq!(js_string_escape("plain"), "\"plain\"");
        assert_eq!(js_string_escape("a\"b\\c"), "\"a\\\"b\\\\c\"");
        assert_eq!(js_string_escape("line\nnext\t"), "\"line\\nnext\\t\"");
        assert_eq!(js_string_escape("\u{1}"), "\"\\u0001\"");
        assert_eq!(js_string_escape("\u{2028}"), "\"\\u2028\"");
    }
}
