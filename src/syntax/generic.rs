use crate::syntax::lexer::Lexer;
use crate::syntax::token::{LineSpan, LineState, TokenClass};

/// Where a heuristic [`Signature`] must appear to count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    /// Anywhere in the text.
    Anywhere,
    /// At the start of a line, after indentation.
    LineStart,
    /// At the end of a line, before trailing whitespace.
    LineEnd,
}

/// A weighted piece of evidence used by content-based language guessing.
#[derive(Clone, Copy, Debug)]
pub struct Signature {
    /// Literal text to look for.
    pub pattern: &'static str,
    /// Score contributed when present (counted once).
    pub weight: f32,
    /// Placement constraint.
    pub anchor: Anchor,
}

impl Signature {
    /// Evidence found anywhere in the text.
    pub const fn anywhere(pattern: &'static str, weight: f32) -> Self {
        Self {
            pattern,
            weight,
            anchor: Anchor::Anywhere,
        }
    }

    /// Evidence found at the start of a line.
    pub const fn line_start(pattern: &'static str, weight: f32) -> Self {
        Self {
            pattern,
            weight,
            anchor: Anchor::LineStart,
        }
    }

    /// Evidence found at the end of a line.
    pub const fn line_end(pattern: &'static str, weight: f32) -> Self {
        Self {
            pattern,
            weight,
            anchor: Anchor::LineEnd,
        }
    }

    fn matches(&self, text: &str) -> bool {
        match self.anchor {
            Anchor::Anywhere => text.contains(self.pattern),
            Anchor::LineStart => text
                .lines()
                .any(|l| l.trim_start().starts_with(self.pattern)),
            Anchor::LineEnd => text.lines().any(|l| l.trim_end().ends_with(self.pattern)),
        }
    }
}

/// String literal delimiters.
#[derive(Clone, Copy, Debug)]
pub struct StringDelim {
    /// Opening delimiter.
    pub open: &'static str,
    /// Closing delimiter.
    pub close: &'static str,
    /// Whether an unterminated literal continues on the next line.
    pub multiline: bool,
}

impl StringDelim {
    /// A single-line literal closed by the same delimiter.
    pub const fn inline(quote: &'static str) -> Self {
        Self {
            open: quote,
            close: quote,
            multiline: false,
        }
    }

    /// A literal that may span lines.
    pub const fn multiline(quote: &'static str) -> Self {
        Self {
            open: quote,
            close: quote,
            multiline: true,
        }
    }
}

/// Configuration for a [`GenericLexer`].
///
/// Delimiter lists are matched in order, so longer delimiters (`"""`) must precede their
/// prefixes (`"`).
#[derive(Clone, Copy, Debug)]
pub struct GenericLexerConfig {
    /// Lowercase identifier.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Alternative identifiers.
    pub aliases: &'static [&'static str],
    /// Plain keywords.
    pub keywords: &'static [&'static str],
    /// Import/module keywords.
    pub namespace_keywords: &'static [&'static str],
    /// Builtin type keywords.
    pub type_keywords: &'static [&'static str],
    /// Keyword constants.
    pub constants: &'static [&'static str],
    /// Builtin functions and objects.
    pub builtins: &'static [&'static str],
    /// Keywords after which the next identifier names a function.
    pub function_keywords: &'static [&'static str],
    /// Keywords after which the next identifier names a type.
    pub class_keywords: &'static [&'static str],
    /// Line comment introducers.
    pub line_comments: &'static [&'static str],
    /// Block comment open/close pair.
    pub block_comment: Option<(&'static str, &'static str)>,
    /// String delimiters, longest first.
    pub strings: &'static [StringDelim],
    /// Prefixes that start a decorator/attribute (`@`, `#[`).
    pub decorators: &'static [&'static str],
    /// Bytes that prefix variables (`$` in shell and PHP).
    pub variable_sigils: &'static [u8],
    /// Extra bytes allowed inside identifiers besides `[A-Za-z0-9_]`.
    pub ident_extra: &'static [u8],
    /// Lines starting with `#` are preprocessor directives.
    pub preprocessor: bool,
    /// `'a` is a lifetime unless it closes as a char literal.
    pub lifetimes: bool,
    /// Keyword tables match regardless of ASCII case.
    pub case_insensitive: bool,
    /// Interpreter names recognised in a `#!` first line.
    pub shebangs: &'static [&'static str],
    /// Evidence for content-based guessing.
    pub signatures: &'static [Signature],
}

impl GenericLexerConfig {
    /// An empty configuration to build language tables from with struct update syntax.
    pub const EMPTY: Self = Self {
        id: "",
        name: "",
        aliases: &[],
        keywords: &[],
        namespace_keywords: &[],
        type_keywords: &[],
        constants: &[],
        builtins: &[],
        function_keywords: &[],
        class_keywords: &[],
        line_comments: &[],
        block_comment: None,
        strings: &[StringDelim::inline("\""), StringDelim::inline("'")],
        decorators: &[],
        variable_sigils: &[],
        ident_extra: &[],
        preprocessor: false,
        lifetimes: false,
        case_insensitive: false,
        shebangs: &[],
        signatures: &[],
    };
}

/// A table-driven lexer covering the lexical shape shared by most C-, script- and
/// shell-family languages: comments, strings, numbers, keyword sets, decorators and sigils.
#[derive(Clone, Copy, Debug)]
pub struct GenericLexer {
    config: GenericLexerConfig,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum PendingDecl {
    None,
    Function,
    Class,
}

impl GenericLexer {
    /// Create a lexer from a configuration table.
    pub const fn new(config: GenericLexerConfig) -> Self {
        Self { config }
    }

    /// Access the configuration table.
    pub fn config(&self) -> &GenericLexerConfig {
        &self.config
    }

    fn word_matches(&self, set: &[&str], word: &str) -> bool {
        if self.config.case_insensitive {
            set.iter().any(|k| k.eq_ignore_ascii_case(word))
        } else {
            set.contains(&word)
        }
    }

    fn classify_word(&self, word: &str, pending: PendingDecl) -> TokenClass {
        let c = &self.config;
        if self.word_matches(c.constants, word) {
            TokenClass::KeywordConstant
        } else if self.word_matches(c.namespace_keywords, word) {
            TokenClass::KeywordNamespace
        } else if self.word_matches(c.keywords, word)
            || self.word_matches(c.function_keywords, word)
            || self.word_matches(c.class_keywords, word)
        {
            TokenClass::Keyword
        } else if self.word_matches(c.type_keywords, word) {
            TokenClass::KeywordType
        } else if pending == PendingDecl::Function {
            TokenClass::NameFunction
        } else if pending == PendingDecl::Class {
            TokenClass::NameClass
        } else if self.word_matches(c.builtins, word) {
            TokenClass::NameBuiltin
        } else {
            TokenClass::Name
        }
    }

    fn is_ident_byte(&self, b: u8) -> bool {
        b.is_ascii_alphanumeric() || b == b'_' || self.config.ident_extra.contains(&b)
    }

    /// End of the identifier starting at `pos`, accepting non-ASCII letters.
    fn scan_ident(&self, line: &str, pos: usize) -> usize {
        let mut end = pos;
        for (off, ch) in line[pos..].char_indices() {
            let ok = if ch.is_ascii() {
                self.is_ident_byte(ch as u8)
            } else {
                ch.is_alphanumeric()
            };
            if !ok {
                return pos + off;
            }
            end = pos + off + ch.len_utf8();
        }
        end
    }

    /// Continue scanning a block comment.
    fn continue_block_comment(&self, line: &str, out: &mut Vec<LineSpan>) -> LineState {
        let Some((_, close)) = self.config.block_comment else {
            return self.tokenize_normal(line, 0, out);
        };
        match line.find(close) {
            Some(end_pos) => {
                let end = end_pos + close.len();
                out.push(LineSpan::new(TokenClass::Comment, 0..end));
                self.tokenize_normal(line, end, out)
            }
            None => {
                if !line.is_empty() {
                    out.push(LineSpan::new(TokenClass::Comment, 0..line.len()));
                }
                LineState::InBlockComment
            }
        }
    }

    /// Continue scanning a multi-line string opened on a previous line.
    fn continue_string(&self, line: &str, idx: u8, out: &mut Vec<LineSpan>) -> LineState {
        let Some(delim) = self.config.strings.get(usize::from(idx)) else {
            return self.tokenize_normal(line, 0, out);
        };
        match find_close(line, 0, delim.close) {
            Some(end) => {
                out.push(LineSpan::new(TokenClass::String, 0..end));
                self.tokenize_normal(line, end, out)
            }
            None => {
                if !line.is_empty() {
                    out.push(LineSpan::new(TokenClass::String, 0..line.len()));
                }
                LineState::InString(idx)
            }
        }
    }

    /// Tokenize from `start` in normal (non-continuation) context.
    fn tokenize_normal(&self, line: &str, start: usize, out: &mut Vec<LineSpan>) -> LineState {
        let c = &self.config;
        let bytes = line.as_bytes();
        let mut pos = start;
        let mut pending = PendingDecl::None;

        'scan: while pos < bytes.len() {
            let ch = bytes[pos];
            let rest = &line[pos..];

            if ch.is_ascii_whitespace() {
                let begin = pos;
                while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
                    pos += 1;
                }
                out.push(LineSpan::new(TokenClass::Whitespace, begin..pos));
                continue;
            }

            if c.preprocessor && ch == b'#' && line[..pos].trim().is_empty() {
                out.push(LineSpan::new(TokenClass::CommentPreproc, pos..bytes.len()));
                return LineState::Normal;
            }

            if let Some((open, close)) = c.block_comment
                && rest.starts_with(open)
            {
                let after_open = pos + open.len();
                match line[after_open..].find(close) {
                    Some(rel) => {
                        let end = after_open + rel + close.len();
                        out.push(LineSpan::new(TokenClass::Comment, pos..end));
                        pos = end;
                        continue;
                    }
                    None => {
                        out.push(LineSpan::new(TokenClass::Comment, pos..bytes.len()));
                        return LineState::InBlockComment;
                    }
                }
            }

            if c.line_comments.iter().any(|lc| rest.starts_with(lc)) {
                out.push(LineSpan::new(TokenClass::Comment, pos..bytes.len()));
                return LineState::Normal;
            }

            if let Some(prefix) = c.decorators.iter().find(|d| rest.starts_with(**d)) {
                let begin = pos;
                pos += prefix.len();
                if prefix.ends_with('[') {
                    // Attribute: scan to the closing bracket.
                    match line[pos..].find(']') {
                        Some(rel) => pos += rel + 1,
                        None => pos = bytes.len(),
                    }
                } else {
                    while pos < bytes.len() && (self.is_ident_byte(bytes[pos]) || bytes[pos] == b'.')
                    {
                        pos += 1;
                    }
                }
                out.push(LineSpan::new(TokenClass::NameDecorator, begin..pos));
                pending = PendingDecl::None;
                continue;
            }

            if c.lifetimes && ch == b'\'' && !is_char_literal(rest) {
                let end = self.scan_ident(line, pos + 1);
                if end > pos + 1 {
                    out.push(LineSpan::new(TokenClass::NameVariable, pos..end));
                    pos = end;
                    continue;
                }
            }

            for (idx, delim) in c.strings.iter().enumerate() {
                if !rest.starts_with(delim.open) {
                    continue;
                }
                let begin = pos;
                match find_close(line, pos + delim.open.len(), delim.close) {
                    Some(end) => {
                        out.push(LineSpan::new(TokenClass::String, begin..end));
                        pos = end;
                        pending = PendingDecl::None;
                        continue 'scan;
                    }
                    None => {
                        out.push(LineSpan::new(TokenClass::String, begin..bytes.len()));
                        if delim.multiline {
                            return LineState::InString(idx as u8);
                        }
                        return LineState::Normal;
                    }
                }
            }

            if ch.is_ascii_digit()
                || (ch == b'.' && bytes.get(pos + 1).is_some_and(u8::is_ascii_digit))
            {
                let end = scan_number(bytes, pos);
                out.push(LineSpan::new(TokenClass::Number, pos..end));
                pos = end;
                pending = PendingDecl::None;
                continue;
            }

            if c.variable_sigils.contains(&ch) {
                let begin = pos;
                pos += 1;
                if bytes.get(pos) == Some(&b'{') {
                    match line[pos..].find('}') {
                        Some(rel) => pos += rel + 1,
                        None => pos = bytes.len(),
                    }
                } else {
                    pos = self.scan_ident(line, pos);
                }
                let class = if pos > begin + 1 {
                    TokenClass::NameVariable
                } else {
                    TokenClass::Operator
                };
                out.push(LineSpan::new(class, begin..pos));
                pending = PendingDecl::None;
                continue;
            }

            let first = rest.chars().next().unwrap_or(' ');
            if ch.is_ascii_alphabetic() || ch == b'_' || (!first.is_ascii() && first.is_alphabetic())
            {
                let end = self.scan_ident(line, pos);
                let word = &line[pos..end];
                let class = self.classify_word(word, pending);
                out.push(LineSpan::new(class, pos..end));
                pending = if self.word_matches(c.function_keywords, word) {
                    PendingDecl::Function
                } else if self.word_matches(c.class_keywords, word) {
                    PendingDecl::Class
                } else {
                    PendingDecl::None
                };
                pos = end;
                continue;
            }

            if is_operator_byte(ch) {
                let begin = pos;
                while pos < bytes.len() && is_operator_byte(bytes[pos]) {
                    pos += 1;
                }
                out.push(LineSpan::new(TokenClass::Operator, begin..pos));
                pending = PendingDecl::None;
                continue;
            }

            let width = first.len_utf8();
            let class = if ch.is_ascii_punctuation() {
                TokenClass::Punctuation
            } else if first.is_ascii() {
                TokenClass::Error
            } else {
                TokenClass::Text
            };
            out.push(LineSpan::new(class, pos..pos + width));
            // `*` / `&` between `fn` and the name are not punctuation here, so only reset on
            // structural characters.
            if matches!(ch, b'(' | b'{' | b';' | b'=') {
                pending = PendingDecl::None;
            }
            pos += width;
        }

        LineState::Normal
    }
}

impl Lexer for GenericLexer {
    fn id(&self) -> &'static str {
        self.config.id
    }

    fn name(&self) -> &'static str {
        self.config.name
    }

    fn aliases(&self) -> &'static [&'static str] {
        self.config.aliases
    }

    fn analyse(&self, text: &str) -> f32 {
        if let Some(first) = text.lines().next()
            && let Some(shebang) = first.strip_prefix("#!")
            && self
                .config
                .shebangs
                .iter()
                .any(|interp| shebang_names(shebang, interp))
        {
            return 1.0;
        }

        let score: f32 = self
            .config
            .signatures
            .iter()
            .filter(|s| s.matches(text))
            .map(|s| s.weight)
            .sum();
        score.clamp(0.0, 0.99)
    }

    fn tokenize_line(&self, line: &str, state: LineState) -> (Vec<LineSpan>, LineState) {
        let mut out = Vec::new();
        let next = match state {
            LineState::InBlockComment => self.continue_block_comment(line, &mut out),
            LineState::InString(idx) => self.continue_string(line, idx, &mut out),
            LineState::Normal => self.tokenize_normal(line, 0, &mut out),
        };
        (out, next)
    }
}

/// Whether the `#!` line runs `interp`, directly or through `env`.
fn shebang_names(shebang: &str, interp: &str) -> bool {
    shebang.split_whitespace().take(2).any(|part| {
        let exe = part.rsplit('/').next().unwrap_or(part);
        exe == interp
            || exe
                .strip_prefix(interp)
                .is_some_and(|v| v.chars().all(|c| c.is_ascii_digit() || c == '.'))
    })
}

/// Byte offset just past the closing delimiter, honouring backslash escapes.
fn find_close(line: &str, from: usize, close: &str) -> Option<usize> {
    let mut chars = line.get(from..)?.char_indices();
    while let Some((off, ch)) = chars.next() {
        if ch == '\\' {
            chars.next();
            continue;
        }
        if line[from + off..].starts_with(close) {
            return Some(from + off + close.len());
        }
    }
    None
}

/// `'x'` or `'\n'` at the start of `rest`.
fn is_char_literal(rest: &str) -> bool {
    let mut chars = rest.chars();
    chars.next();
    match chars.next() {
        Some('\\') => true,
        Some(_) => chars.next() == Some('\''),
        None => false,
    }
}

fn scan_number(bytes: &[u8], pos: usize) -> usize {
    let mut end = pos;
    if end + 1 < bytes.len() && bytes[end] == b'0' && matches!(bytes[end + 1] | 0x20, b'x' | b'b' | b'o')
    {
        end += 2;
        while end < bytes.len() && (bytes[end].is_ascii_hexdigit() || bytes[end] == b'_') {
            end += 1;
        }
        return end;
    }
    while end < bytes.len() && (bytes[end].is_ascii_digit() || bytes[end] == b'_') {
        end += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' && bytes.get(end + 1).is_some_and(u8::is_ascii_digit)
    {
        end += 1;
        while end < bytes.len() && (bytes[end].is_ascii_digit() || bytes[end] == b'_') {
            end += 1;
        }
    }
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp = end + 1;
        if exp < bytes.len() && matches!(bytes[exp], b'+' | b'-') {
            exp += 1;
        }
        if bytes.get(exp).is_some_and(u8::is_ascii_digit) {
            end = exp;
            while end < bytes.len() && bytes[end].is_ascii_digit() {
                end += 1;
            }
        }
    }
    // Type and unit suffixes (u32, f64, px, L).
    while end < bytes.len() && bytes[end].is_ascii_alphanumeric() {
        end += 1;
    }
    end
}

fn is_operator_byte(b: u8) -> bool {
    matches!(
        b,
        b'+' | b'-' | b'*' | b'/' | b'%' | b'=' | b'!' | b'<' | b'>' | b'&' | b'|' | b'^' | b'~'
            | b'?'
    )
}

#[cfg(test)]
#[path = "../../tests/unit/syntax/generic.rs"]
mod tests;
