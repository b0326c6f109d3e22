use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Token categories used to pick rendering colors.
///
/// Classes form a shallow hierarchy (see [`TokenClass::parent`]); a theme that has no color for
/// a class falls back to its parent, then to the theme's default foreground.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum TokenClass {
    /// Plain text.
    Text,
    /// Spaces, tabs and line breaks.
    Whitespace,
    /// Input the lexer could not classify.
    Error,
    /// Language keyword.
    Keyword,
    /// Keyword constants such as `true`, `None`, `null`.
    KeywordConstant,
    /// Import/module keywords such as `import`, `use`, `package`.
    KeywordNamespace,
    /// Builtin type names used as keywords.
    KeywordType,
    /// Identifier.
    Name,
    /// Builtin function or object.
    NameBuiltin,
    /// Name introduced by a type declaration.
    NameClass,
    /// Name introduced by a function declaration.
    NameFunction,
    /// Decorator, attribute or annotation.
    NameDecorator,
    /// Sigil-prefixed variable (`$x`, `@x`) or Rust lifetime.
    NameVariable,
    /// String or character literal.
    String,
    /// Numeric literal.
    Number,
    /// Comment.
    Comment,
    /// Preprocessor directive.
    CommentPreproc,
    /// Operator.
    Operator,
    /// Punctuation and delimiters.
    Punctuation,
}

impl TokenClass {
    /// Every class, in declaration order.
    pub const ALL: [TokenClass; 19] = [
        Self::Text,
        Self::Whitespace,
        Self::Error,
        Self::Keyword,
        Self::KeywordConstant,
        Self::KeywordNamespace,
        Self::KeywordType,
        Self::Name,
        Self::NameBuiltin,
        Self::NameClass,
        Self::NameFunction,
        Self::NameDecorator,
        Self::NameVariable,
        Self::String,
        Self::Number,
        Self::Comment,
        Self::CommentPreproc,
        Self::Operator,
        Self::Punctuation,
    ];

    /// The more general class this one inherits its color from.
    ///
    /// Returns `None` for [`TokenClass::Text`], the root.
    pub fn parent(self) -> Option<TokenClass> {
        match self {
            Self::Text => None,
            Self::KeywordConstant | Self::KeywordNamespace | Self::KeywordType => {
                Some(Self::Keyword)
            }
            Self::NameBuiltin
            | Self::NameClass
            | Self::NameFunction
            | Self::NameDecorator
            | Self::NameVariable => Some(Self::Name),
            Self::CommentPreproc => Some(Self::Comment),
            _ => Some(Self::Text),
        }
    }

    /// Whether this class is a keyword variant.
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            Self::Keyword | Self::KeywordConstant | Self::KeywordNamespace | Self::KeywordType
        )
    }
}

/// A classified fragment of source text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// Token category.
    pub class: TokenClass,
    /// Exact source text of the fragment.
    pub text: String,
}

impl Token {
    /// Create a token from a class and text.
    pub fn new(class: TokenClass, text: impl Into<String>) -> Self {
        Self {
            class,
            text: text.into(),
        }
    }
}

/// A class and a byte range within one line, as produced by [`crate::Lexer::tokenize_line`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineSpan {
    /// Token category.
    pub class: TokenClass,
    /// Byte range inside the line.
    pub range: Range<usize>,
}

impl LineSpan {
    pub(crate) fn new(class: TokenClass, range: Range<usize>) -> Self {
        debug_assert!(range.start <= range.end, "span range must be ordered");
        Self { class, range }
    }
}

/// Lexical state carried from one line to the next.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LineState {
    /// Normal code context.
    #[default]
    Normal,
    /// Inside a block comment.
    InBlockComment,
    /// Inside a multi-line string; the index selects the lexer's opening delimiter.
    InString(u8),
}

#[cfg(test)]
#[path = "../../tests/unit/syntax/token.rs"]
mod tests;
