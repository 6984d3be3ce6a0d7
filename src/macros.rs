//! Macro for declaring named enum types.
//!
//! - `enum_type!`: Define a named enum with its symbols, ordinals and
//!   per-symbol predicates

/// Declare a named enum type.
///
/// Two forms are accepted. Symbols alone are numbered 0, 1, 2, … in order;
/// `SYMBOL = ordinal` pairs use explicit ordinals, which may collide.
///
/// ```
/// use symenum::{enum_type, EnumLike};
///
/// enum_type! {
///     /// How done the toast is.
///     pub Doneness { bread, toasting, toast, burnt }
/// }
///
/// enum_type! {
///     pub Perm { READ = 1, WRITE = 2, EXECUTE = 4 }
/// }
///
/// let toast = Doneness::inflate_symbol("toast").unwrap();
/// assert!(toast.is_toast());
/// assert_eq!(toast.numify(), 2);
/// assert_eq!(Perm::inflate_ordinal(4).unwrap().stringify(), "EXECUTE");
/// ```
///
/// # Generated Code
///
/// The macro generates:
/// - `{Name}`, a newtype over [`EnumValue`](crate::EnumValue) that derefs to it
/// - `{Name}::SYMBOLS`, the symbols in declaration order
/// - `{Name}::is_{symbol}()` for every symbol
/// - an [`EnumLike`](crate::EnumLike) impl whose [`EnumType`](crate::EnumType)
///   is built on first use
/// - `Debug`, `Display`, `FromStr` (by symbol), `TryFrom<i64>` (by ordinal)
///   and conversions into `EnumValue`, `Coercible` and `Comparand`
///
/// # Panics
///
/// Repeating a symbol in the sequence form panics the first time the type is
/// used.
#[macro_export]
macro_rules! enum_type {
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident {
            $($sym:ident),+
            $(,)?
        }
    ) => {
        $crate::enum_type!(@define
            [$(#[$meta])*] $vis $name,
            $crate::EnumDefinition::sequence([$(stringify!($sym)),+]),
            [$($sym),+]
        );
    };

    (
        $(#[$meta:meta])*
        $vis:vis $name:ident {
            $($sym:ident = $ord:expr),+
            $(,)?
        }
    ) => {
        $crate::enum_type!(@define
            [$(#[$meta])*] $vis $name,
            $crate::EnumDefinition::mapping([$((stringify!($sym), ($ord) as i64)),+]),
            [$($sym),+]
        );
    };

    (@define [$(#[$meta:meta])*] $vis:vis $name:ident, $definition:expr, [$($sym:ident),+]) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis struct $name($crate::EnumValue);

        $crate::paste::paste! {
            impl $name {
                /// Symbols in declaration order.
                pub const SYMBOLS: &'static [&'static str] = &[$(stringify!($sym)),+];

                $(
                    #[allow(non_snake_case)]
                    #[doc = "`true` if this value is `" $sym "`."]
                    pub fn [<is_ $sym>](&self) -> bool {
                        self.0
                            .predicate(concat!("is_", stringify!($sym)))
                            .unwrap_or(false)
                    }
                )+
            }

            impl $crate::EnumLike for $name {
                fn enum_type() -> &'static $crate::EnumType {
                    static TYPE: $crate::once_cell::sync::Lazy<$crate::EnumType> =
                        $crate::once_cell::sync::Lazy::new(|| {
                            $crate::EnumType::new(stringify!($name), $definition)
                                .expect(concat!("invalid enum definition for ", stringify!($name)))
                        });
                    &TYPE
                }

                fn wrap(value: $crate::EnumValue) -> Self {
                    Self(value)
                }

                fn as_value(&self) -> &$crate::EnumValue {
                    &self.0
                }

                fn as_value_mut(&mut self) -> &mut $crate::EnumValue {
                    &mut self.0
                }
            }

            impl ::std::ops::Deref for $name {
                type Target = $crate::EnumValue;

                fn deref(&self) -> &$crate::EnumValue {
                    &self.0
                }
            }

            impl ::std::fmt::Debug for $name {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    ::std::fmt::Debug::fmt(&self.0, f)
                }
            }

            impl ::std::fmt::Display for $name {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    ::std::fmt::Display::fmt(&self.0, f)
                }
            }

            impl ::std::str::FromStr for $name {
                type Err = $crate::EnumError;

                fn from_str(symbol: &str) -> ::std::result::Result<Self, Self::Err> {
                    <Self as $crate::EnumLike>::inflate_symbol(symbol)
                }
            }

            impl ::std::convert::TryFrom<i64> for $name {
                type Error = $crate::EnumError;

                fn try_from(ordinal: i64) -> ::std::result::Result<Self, Self::Error> {
                    <Self as $crate::EnumLike>::inflate_ordinal(ordinal)
                }
            }

            impl ::std::convert::From<$name> for $crate::EnumValue {
                fn from(value: $name) -> Self {
                    value.0
                }
            }

            impl ::std::convert::From<$name> for $crate::Coercible {
                fn from(value: $name) -> Self {
                    $crate::Coercible::Value(value.0)
                }
            }

            impl<'a> ::std::convert::From<&'a $name> for $crate::Comparand<'a> {
                fn from(value: &'a $name) -> Self {
                    $crate::Comparand::Value(&value.0)
                }
            }
        }
    };
}
