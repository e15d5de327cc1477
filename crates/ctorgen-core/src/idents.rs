use std::borrow::Cow;

/// Reserved keywords of the target language, sorted for binary search.
///
/// Contextual keywords (`var`, `async`, `record`, ...) are valid identifiers
/// and deliberately absent.
const RESERVED_KEYWORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked", "class",
    "const", "continue", "decimal", "default", "delegate", "do", "double", "else", "enum", "event",
    "explicit", "extern", "false", "finally", "fixed", "float", "for", "foreach", "goto", "if",
    "implicit", "in", "int", "interface", "internal", "is", "lock", "long", "namespace", "new",
    "null", "object", "operator", "out", "override", "params", "private", "protected", "public",
    "readonly", "ref", "return", "sbyte", "sealed", "short", "sizeof", "stackalloc", "static",
    "string", "struct", "switch", "this", "throw", "true", "try", "typeof", "uint", "ulong",
    "unchecked", "unsafe", "ushort", "using", "virtual", "void", "volatile", "while",
];

pub fn is_reserved_keyword(ident: &str) -> bool {
    RESERVED_KEYWORDS.binary_search(&ident).is_ok()
}

/// Escape an identifier that collides with a reserved keyword by prefixing it
/// with the verbatim-identifier marker. Purely lexical.
pub fn escape_identifier(ident: &str) -> Cow<'_, str> {
    if is_reserved_keyword(ident) {
        Cow::Owned(format!("@{ident}"))
    } else {
        Cow::Borrowed(ident)
    }
}

/// Derive the public constructor parameter name for a field.
///
/// Leading underscores are stripped; when stripping would leave something that
/// is not a valid identifier start (empty, or a leading digit), the raw field
/// name is kept instead.
pub fn parameter_name_for_field(field_name: &str) -> &str {
    let stripped = field_name.trim_start_matches('_');
    let valid_start = stripped
        .chars()
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_');
    if valid_start {
        stripped
    } else {
        field_name
    }
}
