//! Declarative definitions.

/// Define a [`StrEnum`](crate::StrEnum) with declaration syntax.
///
/// A member written without a value, or with the empty grouping `()`, is
/// auto-valued and resolves to its own name. Any other value must convert
/// into [`DeclaredValue`](crate::DeclaredValue) (`&str`, `String`, `Arc<str>`).
///
/// Keywords are declared as raw identifiers: `r#type` is the member `type`.
///
/// The expression form evaluates to `Result<StrEnum, EnumError>`:
///
/// ```
/// let color = strenum::str_enum!(Color { RED, GREEN = (), BLUE = "blue" }).unwrap();
/// assert_eq!(color.member("RED").unwrap(), "RED");
/// assert_eq!(color.member("BLUE").unwrap(), "blue");
/// ```
///
/// The `static` form builds the type on first access and panics there if
/// the definition is invalid:
///
/// ```
/// strenum::str_enum!(pub static SUIT: Suit { HEARTS, SPADES });
/// assert_eq!(SUIT.len(), 2);
/// ```
#[macro_export]
macro_rules! str_enum {
    (@value) => {
        $crate::DeclaredValue::Placeholder
    };
    (@value $value:expr) => {
        $crate::DeclaredValue::from($value)
    };
    ($vis:vis static $static_name:ident : $name:ident { $($body:tt)* }) => {
        $vis static $static_name: $crate::__private::Lazy<$crate::StrEnum> =
            $crate::__private::Lazy::new(|| {
                match $crate::str_enum!($name { $($body)* }) {
                    Ok(ty) => ty,
                    Err(err) => panic!("invalid enum `{}`: {}", stringify!($name), err),
                }
            });
    };
    ($name:ident {}) => {
        $crate::StrEnum::define(stringify!($name), $crate::Declaration::new())
    };
    ($name:ident { $($member:ident $(= $value:expr)?),* $(,)? }) => {
        $crate::StrEnum::declare(
            stringify!($name),
            [$((
                $crate::__private::member_name(stringify!($member)),
                $crate::str_enum!(@value $($value)?),
            )),*],
        )
    };
}
