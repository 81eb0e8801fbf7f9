// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `arg_struct!` declaration macro.

/// Declares a configuration struct and implements [`ArgStruct`](crate::service::ArgStruct) for it.
///
/// Each field may carry a tag after `=>`, using the same mini-language as
/// [`ArgOptions::parse_tag`](crate::domain::ArgOptions::parse_tag). Fields are
/// bound in declaration order; long names default to the kebab-cased field name.
///
/// # Examples
///
/// ```
/// use bindargs::arg_struct;
/// use bindargs::service::ArgService;
///
/// arg_struct! {
///     #[derive(Debug)]
///     pub struct Args {
///         pub host: String => "long:host,short:h",
///         pub user: String,
///         pub port: u16 => "short:p",
///         pub debug: bool,
///     }
/// }
///
/// # fn main() -> bindargs::domain::Result<()> {
/// let mut service = ArgService::new();
/// service.bind::<Args>()?;
/// service.resolve(["-h", "localhost", "-p", "1234"], ["BINDARG_USER=someone"])?;
///
/// let args: Args = service.extract()?;
/// assert_eq!(args.host, "localhost");
/// assert_eq!(args.user, "someone");
/// assert_eq!(args.port, 1234);
/// assert!(!args.debug);
/// # Ok(())
/// # }
/// ```
#[macro_export]
macro_rules! arg_struct {
    (@tag) => {
        ""
    };
    (@tag $tag:literal) => {
        $tag
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $ty:ty $(=> $tag:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $ty,
            )*
        }

        impl $crate::service::ArgStruct for $name {
            fn fields() -> ::std::vec::Vec<$crate::service::FieldSpec> {
                ::std::vec![
                    $(
                        $crate::service::FieldSpec::of::<$ty>(
                            ::std::stringify!($field),
                            $crate::arg_struct!(@tag $($tag)?),
                        ),
                    )*
                ]
            }

            fn from_registry(
                registry: &$crate::domain::Registry,
            ) -> $crate::domain::Result<Self> {
                ::std::result::Result::Ok(Self {
                    $(
                        $field: $crate::service::binder::extract_field::<$ty>(
                            registry,
                            &$crate::service::FieldSpec::of::<$ty>(
                                ::std::stringify!($field),
                                $crate::arg_struct!(@tag $($tag)?),
                            ),
                        )?,
                    )*
                })
            }
        }
    };
}
