use std::fmt;

/// Declared accessibility of a generated constructor.
///
/// The set is fixed by the target language; override strings supplied by the
/// host are validated against it and invalid values fall back to
/// [`Accessibility::Public`] at the call site.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Accessibility {
    #[default]
    Public,
    Private,
    Protected,
    Internal,
    ProtectedInternal,
    PrivateProtected,
}

impl Accessibility {
    pub const ALL: [Accessibility; 6] = [
        Accessibility::Public,
        Accessibility::Private,
        Accessibility::Protected,
        Accessibility::Internal,
        Accessibility::ProtectedInternal,
        Accessibility::PrivateProtected,
    ];

    /// Parse an accessibility keyword, tolerating surrounding and interior
    /// whitespace variations of the two-word forms.
    pub fn parse(text: &str) -> Option<Self> {
        let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");
        match normalized.as_str() {
            "public" => Some(Accessibility::Public),
            "private" => Some(Accessibility::Private),
            "protected" => Some(Accessibility::Protected),
            "internal" => Some(Accessibility::Internal),
            "protected internal" => Some(Accessibility::ProtectedInternal),
            "private protected" => Some(Accessibility::PrivateProtected),
            _ => None,
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            Accessibility::Public => "public",
            Accessibility::Private => "private",
            Accessibility::Protected => "protected",
            Accessibility::Internal => "internal",
            Accessibility::ProtectedInternal => "protected internal",
            Accessibility::PrivateProtected => "private protected",
        }
    }
}

impl fmt::Display for Accessibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

#[cfg(test)]
mod tests {
    use super::Accessibility;

    #[test]
    fn parses_every_keyword() {
        for access in Accessibility::ALL {
            assert_eq!(Accessibility::parse(access.keyword()), Some(access));
        }
    }

    #[test]
    fn normalizes_whitespace_in_two_word_forms() {
        assert_eq!(
            Accessibility::parse("  protected   internal "),
            Some(Accessibility::ProtectedInternal)
        );
    }

    #[test]
    fn rejects_unknown_keywords() {
        assert_eq!(Accessibility::parse("friend"), None);
        assert_eq!(Accessibility::parse("Public"), None);
        assert_eq!(Accessibility::parse(""), None);
    }
}
