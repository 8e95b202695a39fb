/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Binary Blob Type
///
/// Blobs represent protocol-agnostic binary content. On the wire they are
/// carried as base64-encoded strings.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct Blob {
    inner: Vec<u8>,
}

impl Blob {
    /// Creates a new blob from the given `input`.
    pub fn new<T: Into<Vec<u8>>>(input: T) -> Self {
        Blob {
            inner: input.into(),
        }
    }

    /// Consumes the `Blob` and returns a `Vec<u8>` with its contents.
    pub fn into_inner(self) -> Vec<u8> {
        self.inner
    }
}

impl AsRef<[u8]> for Blob {
    fn as_ref(&self) -> &[u8] {
        &self.inner
    }
}

impl Serialize for Blob {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&base64::encode(&self.inner))
    }
}

impl<'de> Deserialize<'de> for Blob {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let encoded = String::deserialize(deserializer)?;
        let decoded = base64::decode(&encoded)
            .map_err(|err| D::Error::custom(format!("invalid base64: {}", err)))?;
        Ok(Blob::new(decoded))
    }
}

#[cfg(test)]
mod test {
    use super::Blob;
    use proptest::prelude::*;

    #[test]
    fn blob_serializes_as_base64() {
        let blob = Blob::new("hello world");
        let serialized = serde_json::to_string(&blob).expect("serializable");
        assert_eq!(serialized, "\"aGVsbG8gd29ybGQ=\"");
        let back: Blob = serde_json::from_str(&serialized).expect("deserializable");
        assert_eq!(blob, back);
    }

    #[test]
    fn invalid_base64_is_rejected() {
        let result: Result<Blob, _> = serde_json::from_str("\"not base64!!\"");
        assert!(result.is_err());
    }

    proptest! {
        #[test]
        fn round_trip(data in proptest::collection::vec(any::<u8>(), 0..256)) {
            let blob = Blob::new(data);
            let serialized = serde_json::to_string(&blob).unwrap();
            let back: Blob = serde_json::from_str(&serialized).unwrap();
            prop_assert_eq!(blob, back);
        }
    }
}
