//! The keyword vocabulary of the filter format.

use serde::Serialize;

macro_rules! keyword_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant)),+
                }
            }

            /// Exact, case-sensitive lookup.
            pub fn from_keyword(text: &str) -> Option<Self> {
                Self::ALL.iter().copied().find(|k| k.as_str() == text)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

keyword_enum! {
    /// Block header keywords.
    BlockKeyword { Show, Hide }
}

keyword_enum! {
    /// Condition rules: decide which items a block matches.
    FilterName {
        ItemLevel,
        DropLevel,
        Quality,
        Sockets,
        LinkedSockets,
        Height,
        Width,
        SocketGroup,
        Rarity,
        Class,
        BaseType,
        Identified,
        Corrupted,
        ElderItem,
        ShaperItem,
        ShapedMap,
        ElderMap,
    }
}

keyword_enum! {
    /// Action rules: visual or audio effects applied to matched items.
    ActionName {
        SetBorderColor,
        SetTextColor,
        SetBackgroundColor,
        PlayAlertSound,
        PlayAlertSoundPositional,
        SetFontSize,
        DisableDropSound,
        CustomAlertSound,
    }
}

keyword_enum! {
    /// Values accepted by the `Rarity` condition.
    Rarity { Normal, Magic, Rare, Unique }
}

/// Any keyword that selects a processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Block(BlockKeyword),
    Filter(FilterName),
    Action(ActionName),
}

impl Keyword {
    pub fn from_keyword(text: &str) -> Option<Self> {
        BlockKeyword::from_keyword(text)
            .map(Keyword::Block)
            .or_else(|| FilterName::from_keyword(text).map(Keyword::Filter))
            .or_else(|| ActionName::from_keyword(text).map(Keyword::Action))
    }
}
