//! Escaping for values interpolated into generated pages.

/// Escape a string for safe HTML insertion.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Encode a value as a JavaScript literal that is safe inside a `<script>`
/// element. JSON is valid JS; every `<` becomes `\u003c` so the literal can
/// neither close the element nor open a comment or nested script.
pub fn script_literal<T: serde::Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|_| "null".to_string())
        .replace('<', "\\u003c")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_escape_special_chars() {
        assert_eq!(
            html_escape(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#x27;Jerry&#x27;&lt;/b&gt;"
        );
        assert_eq!(html_escape("S1"), "S1");
    }

    #[test]
    fn plain_ids_become_plain_string_literals() {
        assert_eq!(script_literal("S1"), r#""S1""#);
    }

    #[test]
    fn script_literal_cannot_break_out() {
        let lit = script_literal(r#"x";alert(1);</script><script>"#);
        assert!(!lit.contains("</script>"));
        assert!(lit.starts_with('"') && lit.ends_with('"'));
        assert!(lit.contains(r#"\""#));
    }

    #[test]
    fn script_literal_cannot_open_comment_or_script() {
        let lit = script_literal("<!--<script>");
        assert!(!lit.contains('<'));
        assert_eq!(lit, r#""\u003c!--\u003cscript>""#);
        let decoded: String = serde_json::from_str(&lit).unwrap();
        assert_eq!(decoded, "<!--<script>");
    }

    #[test]
    fn arrays_are_encoded() {
        assert_eq!(script_literal(&["A", "B"]), r#"["A","B"]"#);
    }
}
