//! Syntax profiles: per-language lexical rules for the highlighter.
//!
//! A profile is selected once per document, by filename suffix, and is
//! read-only afterwards. Adding a language means adding one constructor
//! and one entry to the built-in table; nothing else branches on language.

use std::collections::HashSet;
use std::path::Path;

/// Language-specific rules consumed by the highlight engine.
///
/// `keywords` and `types` are disjoint sets matched as whole tokens only.
/// All comment markers are exactly two characters in the built-in table.
pub struct SyntaxProfile {
    pub name: &'static str,
    /// Filename suffixes (with leading dot) that select this profile.
    pub extensions: &'static [&'static str],
    pub keywords: HashSet<&'static str>,
    pub types: HashSet<&'static str>,
    pub line_comment: &'static str,
    pub block_comment_start: &'static str,
    pub block_comment_end: &'static str,
}

impl SyntaxProfile {
    pub fn c() -> Self {
        Self {
            name: "c",
            extensions: &[".c", ".h"],
            keywords: [
                "auto", "break", "case", "continue", "default", "do", "else", "enum", "extern",
                "for", "goto", "if", "register", "return", "sizeof", "static", "struct", "switch",
                "typedef", "union", "volatile", "while", "NULL",
            ]
            .into_iter()
            .collect(),
            types: [
                "int", "long", "double", "float", "char", "unsigned", "signed", "void", "short",
                "const", "bool",
            ]
            .into_iter()
            .collect(),
            line_comment: "//",
            block_comment_start: "/*",
            block_comment_end: "*/",
        }
    }

    pub fn cpp() -> Self {
        Self {
            name: "c++",
            extensions: &[".cpp", ".hpp", ".cc"],
            keywords: [
                "alignas",
                "alignof",
                "and",
                "and_eq",
                "asm",
                "bitand",
                "bitor",
                "class",
                "compl",
                "constexpr",
                "const_cast",
                "decltype",
                "delete",
                "dynamic_cast",
                "explicit",
                "export",
                "false",
                "friend",
                "inline",
                "mutable",
                "namespace",
                "new",
                "noexcept",
                "not",
                "not_eq",
                "nullptr",
                "operator",
                "or",
                "or_eq",
                "private",
                "protected",
                "public",
                "reinterpret_cast",
                "static_assert",
                "static_cast",
                "template",
                "this",
                "thread_local",
                "throw",
                "true",
                "try",
                "typeid",
                "typename",
                "virtual",
                "xor",
                "xor_eq",
            ]
            .into_iter()
            .collect(),
            types: [
                "int", "long", "double", "float", "char", "unsigned", "signed", "void", "short",
                "auto", "const", "bool", "vector",
            ]
            .into_iter()
            .collect(),
            line_comment: "//",
            block_comment_start: "/*",
            block_comment_end: "*/",
        }
    }

    pub fn rust() -> Self {
        Self {
            name: "rust",
            extensions: &[".rs"],
            keywords: [
                "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else",
                "enum", "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match",
                "mod", "move", "mut", "pub", "ref", "return", "self", "Self", "static", "struct",
                "super", "trait", "true", "type", "unsafe", "use", "where", "while",
            ]
            .into_iter()
            .collect(),
            types: [
                "bool", "char", "str", "String", "i8", "i16", "i32", "i64", "i128", "u8", "u16",
                "u32", "u64", "u128", "isize", "usize", "f32", "f64", "Vec", "Option", "Result",
                "Box",
            ]
            .into_iter()
            .collect(),
            line_comment: "//",
            block_comment_start: "/*",
            block_comment_end: "*/",
        }
    }
}

/// The built-in profile table, in lookup order.
fn builtin_profiles() -> Vec<SyntaxProfile> {
    vec![
        SyntaxProfile::c(),
        SyntaxProfile::cpp(),
        SyntaxProfile::rust(),
    ]
}

/// Select a profile for a file path by suffix match.
///
/// Profiles are tried in table order and the first whose extension set
/// matches wins. `None` leaves the document in plain (unhighlighted) mode.
pub fn profile_for(path: &Path) -> Option<SyntaxProfile> {
    let file_name = path.file_name()?.to_str()?;
    builtin_profiles().into_iter().find(|profile| {
        profile
            .extensions
            .iter()
            .any(|ext| file_name.ends_with(ext))
    })
}
