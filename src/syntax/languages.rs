//! Built-in language tables for [`GenericLexer`].

use crate::syntax::generic::{GenericLexer, GenericLexerConfig, Signature, StringDelim};

const C_COMMENT: Option<(&str, &str)> = Some(("/*", "*/"));
const C_STRINGS: &[StringDelim] = &[StringDelim::inline("\""), StringDelim::inline("'")];
const JS_STRINGS: &[StringDelim] = &[
    StringDelim::inline("\""),
    StringDelim::inline("'"),
    StringDelim::multiline("`"),
];

/// Python.
pub fn python() -> GenericLexer {
    GenericLexer::new(GenericLexerConfig {
        id: "python",
        name: "Python",
        aliases: &["py", "python3", "py3", "sage"],
        keywords: &[
            "and", "as", "assert", "async", "await", "break", "continue", "del", "elif", "else",
            "except", "finally", "for", "global", "if", "in", "is", "lambda", "nonlocal", "not",
            "or", "pass", "raise", "return", "try", "while", "with", "yield", "match", "case",
        ],
        namespace_keywords: &["import", "from"],
        type_keywords: &[],
        constants: &["True", "False", "None"],
        builtins: &[
            "print", "len", "range", "open", "int", "float", "str", "bool", "list", "dict",
            "tuple", "set", "type", "isinstance", "super", "enumerate", "zip", "map", "filter",
            "sorted", "min", "max", "sum", "abs", "any", "all", "self", "cls", "object",
        ],
        function_keywords: &["def"],
        class_keywords: &["class"],
        line_comments: &["#"],
        block_comment: None,
        strings: const { &[
            StringDelim::multiline("\"\"\""),
            StringDelim::multiline("'''"),
            StringDelim::inline("\""),
            StringDelim::inline("'"),
        ] },
        decorators: &["@"],
        shebangs: &["python", "pypy"],
        signatures: const { &[
            Signature::line_start("def ", 0.2),
            Signature::line_start("import ", 0.1),
            Signature::line_start("from ", 0.1),
            Signature::line_end(":", 0.2),
            Signature::anywhere("self.", 0.1),
            Signature::anywhere("__init__", 0.2),
            Signature::anywhere("__name__", 0.2),
            Signature::line_start("elif ", 0.3),
            Signature::anywhere("print(", 0.1),
            Signature::anywhere(" None", 0.1),
        ] },
        ..GenericLexerConfig::EMPTY
    })
}

/// Rust.
pub fn rust() -> GenericLexer {
    GenericLexer::new(GenericLexerConfig {
        id: "rust",
        name: "Rust",
        aliases: &["rs"],
        keywords: &[
            "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else",
            "extern", "for", "if", "impl", "in", "let", "loop", "match", "move", "mut", "pub",
            "ref", "return", "static", "super", "unsafe", "where", "while", "yield",
        ],
        namespace_keywords: &["use", "mod"],
        type_keywords: &[
            "bool", "char", "str", "u8", "u16", "u32", "u64", "u128", "usize", "i8", "i16",
            "i32", "i64", "i128", "isize", "f32", "f64", "Self",
        ],
        constants: &["true", "false", "self"],
        builtins: &[
            "Some", "None", "Ok", "Err", "String", "Vec", "Option", "Result", "Box", "Rc", "Arc",
        ],
        function_keywords: &["fn"],
        class_keywords: &["struct", "enum", "trait", "type", "union"],
        line_comments: &["//"],
        block_comment: C_COMMENT,
        strings: C_STRINGS,
        decorators: &["#![", "#["],
        lifetimes: true,
        signatures: const { &[
            Signature::anywhere("fn ", 0.2),
            Signature::anywhere("let mut ", 0.4),
            Signature::anywhere("impl ", 0.2),
            Signature::anywhere("::", 0.1),
            Signature::anywhere("-> ", 0.1),
            Signature::line_start("use ", 0.1),
            Signature::anywhere("#[derive(", 0.4),
            Signature::anywhere("println!", 0.4),
            Signature::line_start("pub ", 0.1),
        ] },
        ..GenericLexerConfig::EMPTY
    })
}

const JS_KEYWORDS: &[&str] = &[
    "async", "await", "break", "case", "catch", "const", "continue", "debugger", "default",
    "delete", "do", "else", "extends", "finally", "for", "if", "in", "instanceof", "let", "new",
    "of", "return", "static", "switch", "throw", "try", "typeof", "var", "void", "while",
    "with", "yield", "get", "set",
];
const JS_BUILTINS: &[&str] = &[
    "console", "window", "document", "Array", "Object", "String", "Number", "Boolean", "Promise",
    "Math", "JSON", "Map", "Set", "Error", "require", "module", "exports", "this", "super",
];

/// JavaScript.
pub fn javascript() -> GenericLexer {
    GenericLexer::new(GenericLexerConfig {
        id: "javascript",
        name: "JavaScript",
        aliases: &["js", "node", "mjs", "cjs", "jsx"],
        keywords: JS_KEYWORDS,
        namespace_keywords: &["import", "export", "from"],
        constants: &["true", "false", "null", "undefined", "NaN", "Infinity"],
        builtins: JS_BUILTINS,
        function_keywords: &["function"],
        class_keywords: &["class"],
        line_comments: &["//"],
        block_comment: C_COMMENT,
        strings: JS_STRINGS,
        ident_extra: b"$",
        shebangs: &["node", "nodejs"],
        signatures: const { &[
            Signature::anywhere("function ", 0.2),
            Signature::anywhere("=> ", 0.2),
            Signature::line_start("const ", 0.2),
            Signature::anywhere("console.log(", 0.4),
            Signature::anywhere("document.", 0.3),
            Signature::anywhere("require(", 0.3),
            Signature::line_end(";", 0.1),
            Signature::anywhere("===", 0.2),
        ] },
        ..GenericLexerConfig::EMPTY
    })
}

/// TypeScript.
pub fn typescript() -> GenericLexer {
    GenericLexer::new(GenericLexerConfig {
        id: "typescript",
        name: "TypeScript",
        aliases: &["ts", "tsx"],
        keywords: &[
            "async", "await", "break", "case", "catch", "const", "continue", "default", "delete",
            "do", "else", "extends", "finally", "for", "if", "implements", "in", "instanceof",
            "let", "new", "of", "return", "static", "switch", "throw", "try", "typeof", "var",
            "void", "while", "yield", "public", "private", "protected", "readonly", "declare",
            "abstract", "as", "keyof", "namespace",
        ],
        namespace_keywords: &["import", "export", "from"],
        type_keywords: &[
            "string", "number", "boolean", "any", "unknown", "never", "void", "object", "bigint",
        ],
        constants: &["true", "false", "null", "undefined"],
        builtins: JS_BUILTINS,
        function_keywords: &["function"],
        class_keywords: &["class", "interface", "type", "enum"],
        line_comments: &["//"],
        block_comment: C_COMMENT,
        strings: JS_STRINGS,
        decorators: &["@"],
        ident_extra: b"$",
        shebangs: &["ts-node", "deno"],
        signatures: const { &[
            Signature::line_start("interface ", 0.4),
            Signature::anywhere(": string", 0.3),
            Signature::anywhere(": number", 0.3),
            Signature::anywhere(": boolean", 0.3),
            Signature::line_start("export ", 0.1),
            Signature::anywhere("=> ", 0.1),
        ] },
        ..GenericLexerConfig::EMPTY
    })
}

const C_KEYWORDS: &[&str] = &[
    "auto", "break", "case", "const", "continue", "default", "do", "else", "extern", "for",
    "goto", "if", "inline", "register", "restrict", "return", "sizeof", "static", "switch",
    "typedef", "volatile", "while",
];
const C_TYPES: &[&str] = &[
    "char", "double", "float", "int", "long", "short", "signed", "unsigned", "void", "size_t",
    "int8_t", "int16_t", "int32_t", "int64_t", "uint8_t", "uint16_t", "uint32_t", "uint64_t",
    "bool", "FILE",
];

/// C.
pub fn c() -> GenericLexer {
    GenericLexer::new(GenericLexerConfig {
        id: "c",
        name: "C",
        aliases: &["h"],
        keywords: C_KEYWORDS,
        type_keywords: C_TYPES,
        constants: &["NULL", "true", "false"],
        builtins: &["printf", "malloc", "free", "memcpy", "strlen", "fprintf", "stderr", "stdout"],
        class_keywords: &["struct", "union", "enum"],
        line_comments: &["//"],
        block_comment: C_COMMENT,
        strings: C_STRINGS,
        preprocessor: true,
        signatures: const { &[
            Signature::line_start("#include <", 0.4),
            Signature::line_start("#define ", 0.2),
            Signature::anywhere("int main(", 0.3),
            Signature::anywhere("printf(", 0.2),
            Signature::anywhere("malloc(", 0.2),
            Signature::anywhere("->", 0.05),
        ] },
        ..GenericLexerConfig::EMPTY
    })
}

/// C++.
pub fn cpp() -> GenericLexer {
    GenericLexer::new(GenericLexerConfig {
        id: "cpp",
        name: "C++",
        aliases: &["c++", "cxx", "cc", "hpp"],
        keywords: &[
            "auto", "break", "case", "catch", "const", "constexpr", "continue", "default",
            "delete", "do", "else", "explicit", "extern", "for", "friend", "goto", "if",
            "inline", "mutable", "new", "noexcept", "operator", "override", "private",
            "protected", "public", "return", "sizeof", "static", "switch", "template", "this",
            "throw", "try", "typedef", "typename", "virtual", "volatile", "while", "final",
        ],
        namespace_keywords: &["namespace", "using"],
        type_keywords: C_TYPES,
        constants: &["nullptr", "NULL", "true", "false"],
        builtins: &["std", "cout", "cin", "endl", "vector", "string", "map", "unique_ptr"],
        class_keywords: &["class", "struct", "union", "enum"],
        line_comments: &["//"],
        block_comment: C_COMMENT,
        strings: C_STRINGS,
        preprocessor: true,
        signatures: const { &[
            Signature::anywhere("std::", 0.4),
            Signature::line_start("#include <iostream>", 0.5),
            Signature::anywhere("template<", 0.3),
            Signature::anywhere("template <", 0.3),
            Signature::line_start("using namespace", 0.4),
            Signature::anywhere("cout <<", 0.3),
            Signature::line_start("#include <", 0.2),
        ] },
        ..GenericLexerConfig::EMPTY
    })
}

/// C#.
pub fn csharp() -> GenericLexer {
    GenericLexer::new(GenericLexerConfig {
        id: "csharp",
        name: "C#",
        aliases: &["c#", "cs"],
        keywords: &[
            "abstract", "async", "await", "base", "break", "case", "catch", "const", "continue",
            "default", "do", "else", "event", "explicit", "finally", "for", "foreach", "if",
            "implicit", "in", "internal", "is", "lock", "new", "out", "override", "params",
            "private", "protected", "public", "readonly", "ref", "return", "sealed", "static",
            "switch", "this", "throw", "try", "var", "virtual", "while", "get", "set",
        ],
        namespace_keywords: &["using", "namespace"],
        type_keywords: &[
            "bool", "byte", "char", "decimal", "double", "float", "int", "long", "object",
            "sbyte", "short", "string", "uint", "ulong", "ushort", "void", "dynamic",
        ],
        constants: &["true", "false", "null"],
        builtins: &["Console", "Math", "List", "Dictionary", "Task", "String"],
        class_keywords: &["class", "struct", "interface", "enum", "record"],
        line_comments: &["//"],
        block_comment: C_COMMENT,
        strings: C_STRINGS,
        preprocessor: true,
        signatures: const { &[
            Signature::line_start("using System", 0.6),
            Signature::anywhere("Console.WriteLine(", 0.5),
            Signature::line_start("namespace ", 0.2),
            Signature::anywhere("{ get; set; }", 0.5),
        ] },
        ..GenericLexerConfig::EMPTY
    })
}

/// Java.
pub fn java() -> GenericLexer {
    GenericLexer::new(GenericLexerConfig {
        id: "java",
        name: "Java",
        aliases: &[],
        keywords: &[
            "abstract", "assert", "break", "case", "catch", "continue", "default", "do", "else",
            "extends", "final", "finally", "for", "if", "implements", "instanceof", "native",
            "new", "private", "protected", "public", "return", "static", "strictfp", "super",
            "switch", "synchronized", "this", "throw", "throws", "transient", "try", "volatile",
            "while", "var",
        ],
        namespace_keywords: &["import", "package"],
        type_keywords: &[
            "boolean", "byte", "char", "double", "float", "int", "long", "short", "void",
        ],
        constants: &["true", "false", "null"],
        builtins: &["System", "String", "Object", "Integer", "List", "Map", "ArrayList"],
        class_keywords: &["class", "interface", "enum", "record"],
        line_comments: &["//"],
        block_comment: C_COMMENT,
        strings: const { &[
            StringDelim::multiline("\"\"\""),
            StringDelim::inline("\""),
            StringDelim::inline("'"),
        ] },
        decorators: &["@"],
        signatures: const { &[
            Signature::anywhere("public static void main", 0.6),
            Signature::anywhere("System.out.println(", 0.5),
            Signature::line_start("package ", 0.2),
            Signature::line_start("import java.", 0.5),
            Signature::anywhere("public class ", 0.3),
        ] },
        ..GenericLexerConfig::EMPTY
    })
}

/// Kotlin.
pub fn kotlin() -> GenericLexer {
    GenericLexer::new(GenericLexerConfig {
        id: "kotlin",
        name: "Kotlin",
        aliases: &["kt", "kts"],
        keywords: &[
            "as", "break", "by", "catch", "companion", "continue", "data", "do", "else", "for",
            "if", "in", "init", "is", "lateinit", "object", "open", "override", "private",
            "protected", "public", "return", "sealed", "suspend", "this", "throw", "try", "val",
            "var", "when", "while", "internal",
        ],
        namespace_keywords: &["import", "package"],
        type_keywords: &["Int", "Long", "Double", "Float", "Boolean", "String", "Unit", "Any"],
        constants: &["true", "false", "null"],
        builtins: &["println", "listOf", "mapOf", "setOf", "mutableListOf"],
        function_keywords: &["fun"],
        class_keywords: &["class", "interface", "enum"],
        line_comments: &["//"],
        block_comment: C_COMMENT,
        strings: const { &[
            StringDelim::multiline("\"\"\""),
            StringDelim::inline("\""),
            StringDelim::inline("'"),
        ] },
        decorators: &["@"],
        signatures: const { &[
            Signature::line_start("fun ", 0.4),
            Signature::line_start("val ", 0.3),
            Signature::anywhere("fun main(", 0.3),
            Signature::anywhere("data class ", 0.5),
        ] },
        ..GenericLexerConfig::EMPTY
    })
}

/// Go.
pub fn go() -> GenericLexer {
    GenericLexer::new(GenericLexerConfig {
        id: "go",
        name: "Go",
        aliases: &["golang"],
        keywords: &[
            "break", "case", "chan", "const", "continue", "default", "defer", "else",
            "fallthrough", "for", "go", "goto", "if", "map", "range", "return", "select",
            "switch", "var",
        ],
        namespace_keywords: &["import", "package"],
        type_keywords: &[
            "bool", "byte", "complex64", "complex128", "error", "float32", "float64", "int",
            "int8", "int16", "int32", "int64", "rune", "string", "uint", "uint8", "uint16",
            "uint32", "uint64", "uintptr", "any",
        ],
        constants: &["true", "false", "nil", "iota"],
        builtins: &[
            "append", "cap", "close", "copy", "delete", "len", "make", "new", "panic", "print",
            "println", "recover", "fmt",
        ],
        function_keywords: &["func"],
        class_keywords: &["type", "struct", "interface"],
        line_comments: &["//"],
        block_comment: C_COMMENT,
        strings: JS_STRINGS,
        signatures: const { &[
            Signature::line_start("package ", 0.3),
            Signature::line_start("func ", 0.3),
            Signature::anywhere(":= ", 0.3),
            Signature::anywhere("fmt.Println(", 0.5),
            Signature::anywhere("err != nil", 0.5),
        ] },
        ..GenericLexerConfig::EMPTY
    })
}

/// Swift.
pub fn swift() -> GenericLexer {
    GenericLexer::new(GenericLexerConfig {
        id: "swift",
        name: "Swift",
        aliases: &[],
        keywords: &[
            "as", "break", "case", "catch", "continue", "default", "defer", "do", "else",
            "extension", "fallthrough", "for", "guard", "if", "in", "init", "inout", "is", "let",
            "private", "public", "internal", "fileprivate", "repeat", "return", "self", "static",
            "switch", "throw", "throws", "try", "var", "where", "while", "override", "mutating",
        ],
        namespace_keywords: &["import"],
        type_keywords: &["Int", "Double", "Float", "Bool", "String", "Character", "Void", "Any"],
        constants: &["true", "false", "nil"],
        builtins: &["print"],
        function_keywords: &["func"],
        class_keywords: &["class", "struct", "enum", "protocol"],
        line_comments: &["//"],
        block_comment: C_COMMENT,
        strings: const { &[StringDelim::multiline("\"\"\""), StringDelim::inline("\"")] },
        decorators: &["@"],
        signatures: const { &[
            Signature::line_start("import UIKit", 0.6),
            Signature::line_start("import SwiftUI", 0.6),
            Signature::line_start("import Foundation", 0.4),
            Signature::anywhere("guard let ", 0.5),
            Signature::anywhere("if let ", 0.2),
            Signature::line_start("func ", 0.2),
        ] },
        ..GenericLexerConfig::EMPTY
    })
}

/// PHP.
pub fn php() -> GenericLexer {
    GenericLexer::new(GenericLexerConfig {
        id: "php",
        name: "PHP",
        aliases: &["php3", "php4", "php5", "php7", "php8"],
        keywords: &[
            "abstract", "as", "break", "case", "catch", "clone", "const", "continue", "declare",
            "default", "do", "echo", "else", "elseif", "extends", "final", "finally", "for",
            "foreach", "global", "if", "implements", "include", "instanceof", "new", "print",
            "private", "protected", "public", "require", "require_once", "include_once",
            "return", "static", "switch", "throw", "try", "while", "match",
        ],
        namespace_keywords: &["namespace", "use"],
        type_keywords: &["array", "bool", "float", "int", "string", "void", "mixed"],
        constants: &["true", "false", "null", "TRUE", "FALSE", "NULL"],
        builtins: &["isset", "unset", "empty", "count", "strlen", "array_map", "implode"],
        function_keywords: &["function"],
        class_keywords: &["class", "interface", "trait"],
        line_comments: &["//", "#"],
        block_comment: C_COMMENT,
        strings: C_STRINGS,
        variable_sigils: b"$",
        shebangs: &["php"],
        signatures: const { &[
            Signature::anywhere("<?php", 0.9),
            Signature::anywhere("$this->", 0.4),
            Signature::anywhere("echo ", 0.1),
        ] },
        ..GenericLexerConfig::EMPTY
    })
}

/// Ruby.
pub fn ruby() -> GenericLexer {
    GenericLexer::new(GenericLexerConfig {
        id: "ruby",
        name: "Ruby",
        aliases: &["rb", "duby"],
        keywords: &[
            "alias", "and", "begin", "break", "case", "do", "else", "elsif", "end", "ensure",
            "for", "if", "in", "next", "not", "or", "redo", "rescue", "retry", "return", "then",
            "undef", "unless", "until", "when", "while", "yield", "attr_accessor",
            "attr_reader", "attr_writer",
        ],
        namespace_keywords: &["require", "require_relative", "include", "extend"],
        constants: &["true", "false", "nil", "self"],
        builtins: &["puts", "print", "p", "raise", "lambda", "proc"],
        function_keywords: &["def"],
        class_keywords: &["class", "module"],
        line_comments: &["#"],
        strings: C_STRINGS,
        variable_sigils: b"@$",
        ident_extra: b"?!",
        shebangs: &["ruby"],
        signatures: const { &[
            Signature::line_start("end", 0.2),
            Signature::line_start("require '", 0.3),
            Signature::line_start("puts ", 0.3),
            Signature::anywhere(" do |", 0.4),
            Signature::line_start("elsif ", 0.4),
            Signature::line_start("def ", 0.1),
            Signature::line_start("attr_accessor", 0.5),
        ] },
        ..GenericLexerConfig::EMPTY
    })
}

/// Bash and POSIX shell.
pub fn bash() -> GenericLexer {
    GenericLexer::new(GenericLexerConfig {
        id: "bash",
        name: "Bash",
        aliases: &["sh", "shell", "zsh", "ksh", "shell-session"],
        keywords: &[
            "if", "then", "else", "elif", "fi", "for", "while", "until", "do", "done", "case",
            "esac", "in", "select", "return", "local", "export", "readonly", "declare",
        ],
        namespace_keywords: &["source"],
        constants: &["true", "false"],
        builtins: &[
            "echo", "cd", "pwd", "exit", "set", "unset", "shift", "test", "read", "printf",
            "eval", "exec", "trap", "alias",
        ],
        function_keywords: &["function"],
        line_comments: &["#"],
        strings: const { &[StringDelim::multiline("\""), StringDelim::multiline("'")] },
        variable_sigils: b"$",
        shebangs: &["bash", "sh", "zsh", "ksh", "dash"],
        signatures: const { &[
            Signature::line_start("echo ", 0.2),
            Signature::line_start("fi", 0.3),
            Signature::line_start("done", 0.3),
            Signature::anywhere("; then", 0.4),
            Signature::anywhere("; do", 0.3),
            Signature::anywhere("$(", 0.2),
            Signature::anywhere("${", 0.2),
        ] },
        ..GenericLexerConfig::EMPTY
    })
}

/// Lua.
pub fn lua() -> GenericLexer {
    GenericLexer::new(GenericLexerConfig {
        id: "lua",
        name: "Lua",
        aliases: &["wlua"],
        keywords: &[
            "and", "break", "do", "else", "elseif", "end", "for", "goto", "if", "in", "local",
            "not", "or", "repeat", "return", "then", "until", "while",
        ],
        constants: &["true", "false", "nil"],
        builtins: &[
            "print", "pairs", "ipairs", "require", "setmetatable", "getmetatable", "tostring",
            "tonumber", "type", "table", "string", "math",
        ],
        function_keywords: &["function"],
        line_comments: &["--"],
        block_comment: Some(("--[[", "]]")),
        strings: const { &[
            StringDelim {
                open: "[[",
                close: "]]",
                multiline: true,
            },
            StringDelim::inline("\""),
            StringDelim::inline("'"),
        ] },
        shebangs: &["lua"],
        signatures: const { &[
            Signature::line_start("local ", 0.3),
            Signature::line_start("end", 0.1),
            Signature::anywhere("~=", 0.3),
            Signature::anywhere(" then", 0.1),
            Signature::anywhere("ipairs(", 0.4),
        ] },
        ..GenericLexerConfig::EMPTY
    })
}

/// SQL.
pub fn sql() -> GenericLexer {
    GenericLexer::new(GenericLexerConfig {
        id: "sql",
        name: "SQL",
        aliases: &["postgresql", "mysql", "sqlite"],
        keywords: &[
            "select", "from", "where", "insert", "into", "values", "update", "set", "delete",
            "create", "table", "drop", "alter", "index", "join", "left", "right", "inner",
            "outer", "on", "group", "by", "order", "having", "limit", "offset", "as", "and",
            "or", "not", "in", "is", "like", "between", "distinct", "union", "primary", "key",
            "foreign", "references", "default", "case", "when", "then", "else", "end", "with",
        ],
        type_keywords: &[
            "int", "integer", "bigint", "smallint", "text", "varchar", "char", "boolean",
            "date", "timestamp", "numeric", "decimal", "real", "serial", "uuid",
        ],
        constants: &["null", "true", "false"],
        builtins: &["count", "sum", "avg", "min", "max", "coalesce", "now"],
        line_comments: &["--"],
        block_comment: C_COMMENT,
        strings: const { &[StringDelim::inline("'"), StringDelim::inline("\"")] },
        case_insensitive: true,
        signatures: const { &[
            Signature::anywhere("SELECT ", 0.4),
            Signature::anywhere("select ", 0.2),
            Signature::anywhere(" FROM ", 0.3),
            Signature::anywhere(" WHERE ", 0.2),
            Signature::anywhere("CREATE TABLE", 0.6),
            Signature::anywhere("INSERT INTO", 0.6),
        ] },
        ..GenericLexerConfig::EMPTY
    })
}

/// CSS.
pub fn css() -> GenericLexer {
    GenericLexer::new(GenericLexerConfig {
        id: "css",
        name: "CSS",
        aliases: &["scss", "less"],
        keywords: &["important", "inherit", "initial", "unset", "auto", "none"],
        builtins: &["rgb", "rgba", "hsl", "hsla", "url", "calc", "var"],
        block_comment: C_COMMENT,
        strings: C_STRINGS,
        decorators: &["@"],
        ident_extra: b"-",
        signatures: const { &[
            Signature::anywhere("color:", 0.3),
            Signature::anywhere("margin:", 0.3),
            Signature::anywhere("padding:", 0.3),
            Signature::anywhere("display:", 0.3),
            Signature::anywhere("px;", 0.2),
            Signature::line_start("@media", 0.4),
        ] },
        ..GenericLexerConfig::EMPTY
    })
}

#[cfg(test)]
#[path = "../../tests/unit/syntax/languages.rs"]
mod tests;
