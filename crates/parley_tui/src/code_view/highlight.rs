//! Keyword-level syntax highlighting for code views (monokai roles).

use crate::theme::{CodePalette, Rgb};

fn keywords_for_lang(lang: &str) -> &'static [&'static str] {
    match lang {
        "rust" | "rs" => &[
            "fn", "let", "mut", "impl", "pub", "use", "mod", "struct", "enum", "trait", "if", "else",
            "match", "for", "in", "while", "loop", "return", "async", "await", "self", "Self", "const",
            "static", "where", "move", "ref", "as", "crate", "super", "type", "unsafe", "dyn",
        ],
        "python" | "py" => &[
            "def", "class", "if", "else", "elif", "for", "in", "while", "return", "import", "from",
            "as", "and", "or", "not", "is", "with", "async", "await", "try", "except", "finally",
            "raise", "lambda", "yield", "pass", "break", "continue", "global",
        ],
        "javascript" | "js" | "typescript" | "ts" => &[
            "function", "const", "let", "var", "return", "if", "else", "for", "while", "async",
            "await", "class", "extends", "import", "export", "from", "new", "typeof", "interface",
            "type", "enum", "try", "catch", "throw", "of", "in",
        ],
        "go" => &[
            "func", "package", "import", "var", "const", "type", "struct", "interface", "if", "else",
            "for", "range", "return", "go", "defer", "chan", "select", "switch", "case", "map",
        ],
        "java" | "kotlin" | "c" | "cpp" | "c++" | "csharp" | "cs" => &[
            "class", "public", "private", "protected", "static", "void", "int", "return", "if",
            "else", "for", "while", "new", "import", "package", "struct", "const", "switch", "case",
            "fun", "val", "var",
        ],
        "bash" | "sh" | "shell" | "zsh" => &[
            "if", "then", "else", "elif", "fi", "for", "in", "do", "done", "while", "case", "esac",
            "function", "export", "local", "return",
        ],
        "sql" => &[
            "select", "from", "where", "insert", "into", "values", "update", "set", "delete",
            "create", "table", "join", "on", "and", "or", "not", "order", "by", "group", "limit",
            "as", "SELECT", "FROM", "WHERE", "INSERT", "INTO", "VALUES", "UPDATE", "SET", "DELETE",
            "CREATE", "TABLE", "JOIN", "ON", "AND", "OR", "NOT", "ORDER", "BY", "GROUP", "LIMIT", "AS",
        ],
        _ => &[],
    }
}

/// Literal constants colored like numbers.
const CONSTANTS: &[&str] = &["true", "false", "null", "None", "True", "False", "nil", "undefined"];

fn line_comment(lang: &str) -> Option<&'static str> {
    match lang {
        "python" | "py" | "bash" | "sh" | "shell" | "zsh" | "yaml" | "yml" | "toml" | "ruby" | "rb" => {
            Some("#")
        }
        "sql" | "lua" | "haskell" => Some("--"),
        "json" | "" | "text" | "plain" => None,
        _ => Some("//"),
    }
}

fn starts_with_at(chars: &[char], i: usize, pat: &str) -> bool {
    let mut k = i;
    for p in pat.chars() {
        if chars.get(k) != Some(&p) {
            return false;
        }
        k += 1;
    }
    true
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_ident(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Split one line into `(color, text)` tokens. `lang` is the lower-cased fence label.
///
/// JSON keys (a string followed by `:`) and identifiers followed by `(` use the name color.
pub fn highlight_code_line(line: &str, lang: &str, code: &CodePalette) -> Vec<(Rgb, String)> {
    let keywords = keywords_for_lang(lang);
    let comment = line_comment(lang);
    let chars: Vec<char> = line.chars().collect();
    let mut tokens: Vec<(Rgb, String)> = Vec::new();
    let mut push = |color: Rgb, text: String| match tokens.last_mut() {
        Some((last, acc)) if *last == color => acc.push_str(&text),
        _ => tokens.push((color, text)),
    };

    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if let Some(marker) = comment
            && starts_with_at(&chars, i, marker)
            && (marker != "#" || i == 0 || chars[i - 1].is_whitespace())
        {
            push(code.comment, chars[i..].iter().collect());
            break;
        }
        if c == '"' || c == '\'' || c == '`' {
            let start = i;
            i += 1;
            while i < chars.len() && chars[i] != c {
                if chars[i] == '\\' {
                    i += 1;
                }
                i += 1;
            }
            i = (i + 1).min(chars.len());
            let text: String = chars[start..i].iter().collect();
            let rest = chars[i..].iter().find(|c| !c.is_whitespace());
            let color = if lang == "json" && rest == Some(&':') {
                code.name
            } else {
                code.string
            };
            push(color, text);
            continue;
        }
        if is_ident_start(c) {
            let start = i;
            while i < chars.len() && is_ident(chars[i]) {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            let color = if keywords.contains(&word.as_str()) {
                code.keyword
            } else if CONSTANTS.contains(&word.as_str()) {
                code.number
            } else if chars.get(i) == Some(&'(') {
                code.name
            } else {
                code.foreground
            };
            push(color, word);
            continue;
        }
        if c.is_ascii_digit() {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '.' || chars[i] == '_') {
                i += 1;
            }
            push(code.number, chars[start..i].iter().collect());
            continue;
        }
        push(code.foreground, c.to_string());
        i += 1;
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colors(line: &str, lang: &str) -> Vec<(Rgb, String)> {
        highlight_code_line(line, lang, &CodePalette::monokai())
    }

    #[test]
    fn rust_keyword_and_function_name() {
        let code = CodePalette::monokai();
        let tokens = colors("fn main() {}", "rust");
        assert_eq!(tokens[0], (code.keyword, "fn".to_string()));
        assert!(tokens.contains(&(code.name, "main".to_string())));
    }

    #[test]
    fn python_comment_and_string() {
        let code = CodePalette::monokai();
        let tokens = colors("x = 'hi'  # note", "python");
        assert!(tokens.contains(&(code.string, "'hi'".to_string())));
        assert_eq!(tokens.last(), Some(&(code.comment, "# note".to_string())));
    }

    #[test]
    fn json_keys_values_and_constants() {
        let code = CodePalette::monokai();
        let tokens = colors(r#"  "a": "b", "n": 12, "ok": true"#, "json");
        assert!(tokens.contains(&(code.name, r#""a""#.to_string())));
        assert!(tokens.contains(&(code.string, r#""b""#.to_string())));
        assert!(tokens.contains(&(code.number, "12".to_string())));
        assert!(tokens.contains(&(code.number, "true".to_string())));
    }

    #[test]
    fn hash_inside_word_is_not_a_comment() {
        let code = CodePalette::monokai();
        let tokens = colors("echo a#b", "bash");
        assert!(!tokens.iter().any(|(c, _)| *c == code.comment));
    }

    #[test]
    fn unknown_language_and_non_ascii() {
        let tokens = colors("héllo → wörld", "brainfuck");
        let joined: String = tokens.iter().map(|(_, t)| t.as_str()).collect();
        assert_eq!(joined, "héllo → wörld");
    }

    #[test]
    fn unterminated_string_runs_to_end() {
        let code = CodePalette::monokai();
        let tokens = colors("let s = \"open", "rust");
        assert_eq!(tokens.last(), Some(&(code.string, "\"open".to_string())));
    }

    #[test]
    fn empty_line_has_no_tokens() {
        assert!(colors("", "rust").is_empty());
    }
}
