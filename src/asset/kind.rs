//! Asset kind definitions.

/// Kind of companion snippet a component can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    /// Style text, bundled into the css file.
    Style,
    /// Script text, bundled into the js file.
    Script,
}

impl AssetKind {
    /// Both kinds, in bundle output order.
    pub const ALL: [Self; 2] = [Self::Style, Self::Script];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Style => "css",
            Self::Script => "js",
        }
    }
}

impl std::fmt::Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
