use core::fmt;

/// The tag of a [`Variant`](crate::Variant).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantKind {
    Null,
    Bool,
    Integer,
    Double,
    String,
    Seq,
    Map,
}

impl VariantKind {
    /// Lowercase name used in messages.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Integer => "integer",
            Self::Double => "double",
            Self::String => "string",
            Self::Seq => "sequence",
            Self::Map => "map",
        }
    }
}

impl fmt::Display for VariantKind {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
