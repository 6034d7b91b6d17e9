// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Closed enumerations with a stable wire token per variant.
//!
//! Concrete enums are declared with [`value_enum!`](crate::value_enum!), which
//! generates the enum, its [`ValueEnum`] impl (including a token table built
//! once on first decode), `Display`, `FromStr` and serde impls.
//!
//! Result records decode enum fields through [`lenient`], so an unknown token
//! leaves the field empty instead of failing the record.

use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// A closed set of variants, each with an injective external token.
pub trait ValueEnum: Sized + Copy + Eq + std::fmt::Debug + 'static {
	/// Every variant, in declaration order.
	fn variants() -> &'static [Self];

	/// The wire token for this variant.
	fn token(self) -> &'static str;

	/// Maps a wire token back to its variant. Unknown tokens yield `None`.
	fn decode(token: &str) -> Option<Self>;
}

/// Returned by `FromStr` on value enums for tokens outside the set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} token: {token}")]
pub struct UnknownToken {
	pub kind: &'static str,
	pub token: String,
}

/// Deserializes an optional value-enum field, mapping anything that is not a
/// known token (wrong type included) to `None`.
///
/// Use with `#[serde(default, deserialize_with = "gsdk_core::value_enum::lenient")]`.
pub fn lenient<'de, D, E>(deserializer: D) -> Result<Option<E>, D::Error>
where
	D: Deserializer<'de>,
	E: ValueEnum,
{
	let value = serde_json::Value::deserialize(deserializer)?;
	Ok(value.as_str().and_then(E::decode))
}

/// Declares a value enum.
///
/// ```ignore
/// gsdk_core::value_enum! {
///     /// Travel mode for route calculations.
///     pub enum TravelMode {
///         Driving => "driving",
///         Walking => "walking",
///     }
/// }
/// ```
#[macro_export]
macro_rules! value_enum {
	(
		$(#[$meta:meta])*
		$vis:vis enum $name:ident {
			$($(#[$vmeta:meta])* $variant:ident => $token:literal),+ $(,)?
		}
	) => {
		$(#[$meta])*
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
		$vis enum $name {
			$($(#[$vmeta])* $variant),+
		}

		impl $crate::value_enum::ValueEnum for $name {
			fn variants() -> &'static [Self] {
				&[$($name::$variant),+]
			}

			fn token(self) -> &'static str {
				match self {
					$($name::$variant => $token),+
				}
			}

			fn decode(token: &str) -> ::std::option::Option<Self> {
				static TABLE: ::std::sync::LazyLock<
					::std::collections::HashMap<&'static str, $name>,
				> = ::std::sync::LazyLock::new(|| {
					<$name as $crate::value_enum::ValueEnum>::variants()
						.iter()
						.map(|v| ($crate::value_enum::ValueEnum::token(*v), *v))
						.collect()
				});
				TABLE.get(token).copied()
			}
		}

		impl ::std::fmt::Display for $name {
			fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
				f.write_str($crate::value_enum::ValueEnum::token(*self))
			}
		}

		impl ::std::str::FromStr for $name {
			type Err = $crate::value_enum::UnknownToken;

			fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
				<$name as $crate::value_enum::ValueEnum>::decode(s).ok_or_else(|| {
					$crate::value_enum::UnknownToken {
						kind: stringify!($name),
						token: s.to_string(),
					}
				})
			}
		}

		impl ::std::convert::From<$name> for $crate::param::ParamValue {
			fn from(value: $name) -> Self {
				$crate::param::ParamValue::Text(
					$crate::value_enum::ValueEnum::token(value).to_string(),
				)
			}
		}

		impl $crate::__private::serde::Serialize for $name {
			fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
			where
				S: $crate::__private::serde::Serializer,
			{
				serializer.serialize_str($crate::value_enum::ValueEnum::token(*self))
			}
		}

		impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
			fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
			where
				D: $crate::__private::serde::Deserializer<'de>,
			{
				let token = <::std::string::String as $crate::__private::serde::Deserialize>::deserialize(
					deserializer,
				)?;
				token
					.parse::<$name>()
					.map_err(<D::Error as $crate::__private::serde::de::Error>::custom)
			}
		}
	};
}


#[cfg(test)]
mod proptests {
	use super::*;
	use proptest::prelude::*;

	crate::value_enum! {
		enum Mode {
			Driving => "driving",
			Walking => "walking",
			Bicycling => "bicycling",
		}
	}

	proptest! {
		#[test]
		fn decode_inverts_encode(index in 0usize..3) {
			let variant = Mode::variants()[index];
			prop_assert_eq!(Mode::decode(variant.token()), Some(variant));
		}

		#[test]
		fn unknown_tokens_decode_to_none(token in "[A-Z0-9_]{1,12}") {
			prop_assert_eq!(Mode::decode(&token), None);
		}
	}
}
