//! Generator for string-backed value sets.
//!
//! Many Amazon Connect members document a closed list of legal values but
//! travel as plain strings, and the service adds values over time. The
//! [`soft_enum!`](crate::soft_enum) macro turns such a list into a real enum
//! with one variant per documented value plus an `Unknown(String)` variant
//! that keeps anything else verbatim.

/// Declares a string-backed enum that tolerates values it does not know.
///
/// Each variant is bound to its wire string. The generated type gets:
///
/// - `as_str()`, `VALUES`, `known()` and `is_known()`
/// - `From<&str>`, `From<String>` and an infallible `FromStr`
/// - `Display`, `AsRef<str>` and `From<Self> for String`
/// - string `Serialize`/`Deserialize`
/// - equality, ordering and hashing by wire string
///
/// ## Examples
///
/// ```
/// connect_define::soft_enum! {
///     /// Contact channel.
///     pub enum Channel {
///         Voice = "VOICE",
///         Chat = "CHAT",
///     }
/// }
///
/// assert_eq!(Channel::from("VOICE"), Channel::Voice);
/// assert_eq!(Channel::Chat.as_str(), "CHAT");
///
/// let unknown = Channel::from("CARRIER_PIGEON");
/// assert!(!unknown.is_known());
/// assert_eq!(unknown.to_string(), "CARRIER_PIGEON");
/// ```
#[macro_export]
macro_rules! soft_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $wire:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
            /// A value not documented when this model was written.
            Unknown(::std::string::String),
        }

        impl $name {
            /// Every documented wire value, in declaration order.
            pub const VALUES: &'static [&'static str] = &[$($wire),+];

            /// Returns the wire string of this value.
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $wire,)+
                    Self::Unknown(value) => value.as_str(),
                }
            }

            /// Returns `true` unless this is an `Unknown` value.
            pub fn is_known(&self) -> bool {
                !::std::matches!(self, Self::Unknown(_))
            }

            /// Iterates over the documented variants.
            pub fn known() -> impl ::std::iter::Iterator<Item = Self> {
                [$(Self::$variant),+].into_iter()
            }

            fn lookup(value: &str) -> ::std::option::Option<Self> {
                match value {
                    $($wire => ::std::option::Option::Some(Self::$variant),)+
                    _ => ::std::option::Option::None,
                }
            }
        }

        impl ::std::convert::From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::lookup(value).unwrap_or_else(|| Self::Unknown(value.to_owned()))
            }
        }

        impl ::std::convert::From<::std::string::String> for $name {
            fn from(value: ::std::string::String) -> Self {
                match Self::lookup(&value) {
                    ::std::option::Option::Some(known) => known,
                    ::std::option::Option::None => Self::Unknown(value),
                }
            }
        }

        impl ::std::convert::From<$name> for ::std::string::String {
            fn from(value: $name) -> Self {
                match value {
                    $name::Unknown(raw) => raw,
                    known => known.as_str().to_owned(),
                }
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::std::convert::Infallible;

            fn from_str(value: &str) -> ::std::result::Result<Self, Self::Err> {
                ::std::result::Result::Ok(Self::from(value))
            }
        }

        impl ::std::convert::AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::cmp::PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.as_str() == other.as_str()
            }
        }

        impl ::std::cmp::Eq for $name {}

        impl ::std::cmp::PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> ::std::option::Option<::std::cmp::Ordering> {
                ::std::option::Option::Some(::std::cmp::Ord::cmp(self, other))
            }
        }

        impl ::std::cmp::Ord for $name {
            fn cmp(&self, other: &Self) -> ::std::cmp::Ordering {
                self.as_str().cmp(other.as_str())
            }
        }

        impl ::std::hash::Hash for $name {
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                ::std::hash::Hash::hash(self.as_str(), state);
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let raw = <::std::string::String as $crate::__private::serde::Deserialize>::deserialize(
                    deserializer,
                )?;
                ::std::result::Result::Ok(Self::from(raw))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::str::FromStr;

    crate::soft_enum! {
        /// Test value set.
        pub enum Color {
            /// Red.
            Red = "RED",
            Green = "GREEN",
            DarkBlue = "DARK_BLUE",
        }
    }

    #[test]
    fn known_strings_map_to_variants() {
        assert_eq!(Color::from("RED"), Color::Red);
        assert_eq!(Color::from("DARK_BLUE".to_string()), Color::DarkBlue);
        assert_eq!(Color::from_str("GREEN").unwrap(), Color::Green);
    }

    #[test]
    fn unknown_strings_are_preserved() {
        let color = Color::from("PURPLE");
        assert_eq!(color, Color::Unknown("PURPLE".to_string()));
        assert!(!color.is_known());
        assert_eq!(color.as_str(), "PURPLE");
        assert_eq!(String::from(color), "PURPLE");
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert!(!Color::from("red").is_known());
    }

    #[test]
    fn unknown_with_known_spelling_equals_variant() {
        let raw = Color::Unknown("RED".to_string());
        assert_eq!(raw, Color::Red);

        let mut set = HashSet::new();
        set.insert(Color::Red);
        assert!(set.contains(&raw));
    }

    #[test]
    fn values_and_known_follow_declaration_order() {
        assert_eq!(Color::VALUES, &["RED", "GREEN", "DARK_BLUE"]);
        let known: Vec<_> = Color::known().collect();
        assert_eq!(known, vec![Color::Red, Color::Green, Color::DarkBlue]);
    }

    #[test]
    fn display_and_string_conversion_use_wire_value() {
        assert_eq!(Color::DarkBlue.to_string(), "DARK_BLUE");
        assert_eq!(String::from(Color::Green), "GREEN");
        assert_eq!(Color::Red.as_ref(), "RED");
    }

    #[test]
    fn serde_uses_bare_strings() {
        assert_eq!(serde_json::to_string(&Color::DarkBlue).unwrap(), "\"DARK_BLUE\"");

        let parsed: Color = serde_json::from_str("\"GREEN\"").unwrap();
        assert_eq!(parsed, Color::Green);

        let parsed: Color = serde_json::from_str("\"ULTRAVIOLET\"").unwrap();
        assert_eq!(parsed, Color::Unknown("ULTRAVIOLET".to_string()));
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"ULTRAVIOLET\"");
    }

    #[test]
    fn ordering_is_by_wire_string() {
        let mut colors = vec![Color::Red, Color::DarkBlue, Color::Green];
        colors.sort();
        assert_eq!(colors, vec![Color::DarkBlue, Color::Green, Color::Red]);
    }
}
