/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Macros used by the service shape crates.

/// Defines a string-backed service enum.
///
/// AWS models these as open string sets: services add values over time and
/// an older client must not fail when it sees one. The generated enum is
/// therefore closed over the values known at generation time plus an
/// `Unknown(String)` variant that preserves anything unrecognized, and it
/// serializes/deserializes through its wire string.
///
/// ```
/// shape_types::string_enum! {
///     /// The state of a widget.
///     pub enum WidgetState {
///         /// The widget is live.
///         Active => "active",
///         /// The widget is being set up.
///         Provisioning => "provisioning",
///     }
/// }
///
/// assert_eq!(WidgetState::Active.as_str(), "active");
/// assert_eq!(WidgetState::from("brand-new"), WidgetState::Unknown("brand-new".to_string()));
/// ```
#[macro_export]
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $value:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[non_exhaustive]
        #[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
            /// A value not yet known to this version of the client.
            Unknown(String),
        }

        impl $name {
            /// Returns the wire representation of the enum value.
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $value,)+
                    Self::Unknown(value) => value.as_str(),
                }
            }

            /// Returns all wire values known to this version of the client.
            pub fn values() -> &'static [&'static str] {
                &[$($value,)+]
            }
        }

        impl ::std::convert::From<&str> for $name {
            fn from(s: &str) -> Self {
                match s {
                    $($value => Self::$variant,)+
                    other => Self::Unknown(other.to_owned()),
                }
            }
        }

        impl ::std::convert::From<::std::string::String> for $name {
            fn from(s: ::std::string::String) -> Self {
                Self::from(s.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::std::convert::Infallible;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                Ok(Self::from(s))
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $crate::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> $crate::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::serde::Deserializer<'de>,
            {
                let value =
                    <::std::string::String as $crate::serde::Deserialize<'de>>::deserialize(deserializer)?;
                Ok(Self::from(value))
            }
        }
    };
}

/// Defines the modeled exception structs for a service together with the
/// service-wide `Error` enum.
///
/// Each entry produces a struct carrying the optional `Message` the service
/// returned, and a matching `Error` variant. Codes the client has no model
/// for are routed to `Error::Unhandled`, which wraps a
/// [`GenericError`](crate::GenericError) so nothing is lost.
///
/// The invoking crate must depend on `serde` and `thiserror`.
///
/// ```
/// shape_types::modeled_errors! {
///     /// All modeled widget-service errors.
///     pub enum Error {
///         /// The specified widget does not exist.
///         WidgetNotFoundException => "WidgetNotFound",
///     }
/// }
///
/// let err = Error::from_parts("WidgetNotFound", Some("no such widget".to_string()), None);
/// assert!(matches!(err, Error::WidgetNotFoundException(_)));
/// assert_eq!(err.code(), Some("WidgetNotFound"));
/// ```
#[macro_export]
macro_rules! modeled_errors {
    (
        $(#[$enum_meta:meta])*
        pub enum Error {
            $(
                $(#[$exc_meta:meta])*
                $exc:ident => $code:literal
            ),+ $(,)?
        }
    ) => {
        $(
            $(#[$exc_meta])*
            #[non_exhaustive]
            #[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
            pub struct $exc {
                /// The error message returned by the service.
                #[serde(rename = "Message", default, skip_serializing_if = "Option::is_none")]
                pub message: Option<String>,
            }

            impl $exc {
                /// The error code the service uses on the wire for this exception.
                pub const CODE: &'static str = $code;
            }

            impl ::std::fmt::Display for $exc {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    match &self.message {
                        Some(message) => write!(f, "{}: {}", $code, message),
                        None => f.write_str($code),
                    }
                }
            }

            impl ::std::error::Error for $exc {}
        )+

        $(#[$enum_meta])*
        #[non_exhaustive]
        #[derive(Clone, Debug, PartialEq, thiserror::Error)]
        pub enum Error {
            $(
                $(#[$exc_meta])*
                #[error(transparent)]
                $exc(#[from] $exc),
            )+
            /// An error with a code this version of the client has no model for.
            #[error(transparent)]
            Unhandled(#[from] $crate::GenericError),
        }

        impl Error {
            /// Resolves a wire error code to the matching modeled exception.
            ///
            /// Codes without a model land in [`Error::Unhandled`] with the
            /// code, message and request ID preserved.
            pub fn from_parts(
                code: &str,
                message: ::std::option::Option<::std::string::String>,
                request_id: ::std::option::Option<::std::string::String>,
            ) -> Self {
                match code {
                    $($code => Self::$exc($exc { message }),)+
                    _ => {
                        let mut generic = $crate::GenericError::builder().code(code);
                        if let Some(message) = message {
                            generic = generic.message(message);
                        }
                        if let Some(request_id) = request_id {
                            generic = generic.request_id(request_id);
                        }
                        Self::Unhandled(generic.build())
                    }
                }
            }

            /// Returns the wire error code for this error, if known.
            pub fn code(&self) -> ::std::option::Option<&str> {
                match self {
                    $(Self::$exc(_) => Some($code),)+
                    Self::Unhandled(generic) => generic.code(),
                }
            }
        }
    };
}

#[cfg(test)]
mod test {
    crate::string_enum! {
        /// Test enum.
        pub enum TestState {
            /// a
            Active => "active",
            /// p
            Provisioning => "provisioning",
        }
    }

    #[test]
    fn known_values_round_trip() {
        assert_eq!(TestState::from("active"), TestState::Active);
        assert_eq!(TestState::Active.as_str(), "active");
        assert_eq!(TestState::values(), &["active", "provisioning"]);
    }

    #[test]
    fn unknown_values_are_preserved() {
        let state = TestState::from("deleting");
        assert_eq!(state, TestState::Unknown("deleting".to_string()));
        assert_eq!(state.as_str(), "deleting");
    }

    #[test]
    fn serde_goes_through_the_wire_string() {
        let json = serde_json::to_string(&TestState::Provisioning).unwrap();
        assert_eq!(json, "\"provisioning\"");
        let state: TestState = serde_json::from_str("\"draining\"").unwrap();
        assert_eq!(state, TestState::Unknown("draining".to_string()));
    }

    mod errors {
        crate::modeled_errors! {
            /// Errors for the test service.
            pub enum Error {
                /// The requested thing does not exist.
                NotFoundException => "NotFound",
            }
        }

        #[test]
        fn modeled_codes_resolve_to_their_exception() {
            let err = Error::from_parts("NotFound", Some("no such thing".to_string()), None);
            assert!(matches!(err, Error::NotFoundException(_)));
            assert_eq!(err.code(), Some("NotFound"));
            assert_eq!(err.to_string(), "NotFound: no such thing");
        }

        #[test]
        fn unmodeled_codes_fall_back_to_generic() {
            let err = Error::from_parts(
                "Throttling",
                Some("slow down".to_string()),
                Some("req-1".to_string()),
            );
            match err {
                Error::Unhandled(generic) => {
                    assert_eq!(generic.code(), Some("Throttling"));
                    assert_eq!(generic.message(), Some("slow down"));
                }
                other => panic!("unexpected: {:?}", other),
            }
        }
    }
}
