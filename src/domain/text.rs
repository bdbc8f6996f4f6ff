use thousands::Separable;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Hard-wraps `s` so that no line exceeds `width` display columns
pub fn wrap_text(s: &str, width: usize) -> String {
    if width == 0 {
        return String::from("");
    }

    let mut out = String::with_capacity(s.len());
    let mut line_width = 0;
    for c in s.chars() {
        if c == '\n' {
            out.push(c);
            line_width = 0;
            continue;
        }
        let w = c.width().unwrap_or(0);
        if line_width + w > width && line_width > 0 {
            out.push('\n');
            line_width = 0;
        }
        out.push(c);
        line_width += w;
    }
    out
}

/// Keeps at most `max_height` lines, replacing the tail with `...`
pub fn truncate_text(s: &str, max_height: usize) -> String {
    if max_height == 0 {
        return String::from("");
    }

    let lines: Vec<&str> = s.lines().collect();
    if lines.len() > max_height {
        if max_height == 1 {
            String::from("...")
        } else {
            format!("{}\n...", lines[..max_height - 1].join("\n"))
        }
    } else {
        s.to_string()
    }
}

/// Cuts `s` to `max_width` display columns, ending with `…` when cut
pub fn ellipsize(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// `12345` -> `12,345`
pub fn format_count<N: Separable>(n: N) -> String {
    n.separate_with_commas()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_wrap_text_no_wrap_alnum() {
        assert_eq!(wrap_text("hello, world!", 13), "hello, world!");
    }

    #[test]
    fn test_wrap_text_wrap_alnum() {
        assert_eq!(wrap_text("hello, world!", 4), "hell\no, w\norld\n!");
    }

    #[test]
    fn test_wrap_text_wrap_double_width() {
        assert_eq!(wrap_text("日本語講座", 4), "日本\n語講\n座");
    }

    #[test]
    fn test_wrap_text_keeps_newlines() {
        assert_eq!(wrap_text("ab\ncdef", 3), "ab\ncde\nf");
    }

    #[test]
    fn test_wrap_text_zero_width() {
        assert_eq!(wrap_text("hello, world!", 0), "");
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("foo\nbar\nbaz", 3), "foo\nbar\nbaz");
        assert_eq!(truncate_text("foo\nbar\nbaz", 2), "foo\n...");
        assert_eq!(truncate_text("foo\nbar", 1), "...");
        assert_eq!(truncate_text("foo\nbar\nbaz", 0), "");
    }

    #[test]
    fn test_ellipsize() {
        assert_eq!(ellipsize("Data Structures", 20), "Data Structures");
        assert_eq!(ellipsize("Data Structures", 8), "Data St…");
        assert_eq!(ellipsize("日本語講座", 5), "日本…");
        assert_eq!(ellipsize("abc", 0), "");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(12345_u32), "12,345");
    }
}
