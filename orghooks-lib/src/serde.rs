use std::fmt;

use serde::de;

struct LenientStringVisitor;

impl<'de> de::Visitor<'de> for LenientStringVisitor {
    type Value = String;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a string, an integer or null")
    }

    fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(s.to_owned())
    }

    fn visit_string<E>(self, s: String) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(s)
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(v.to_string())
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(v.to_string())
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(String::new())
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(String::new())
    }
}

/// accepts `"0"`, `0` or `null` for string fields the upstream api is loose
/// about. `insecure_ssl` is the main offender.
pub mod lenient_string {
    use serde::de;

    use super::LenientStringVisitor;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: de::Deserializer<'de>
    {
        deserializer.deserialize_any(LenientStringVisitor)
    }
}

#[cfg(test)]
mod test {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "super::lenient_string::deserialize")]
        value: String,
    }

    #[test]
    fn lenient_values() {
        let cases = [
            (r#"{"value":"0"}"#, "0"),
            (r#"{"value":1}"#, "1"),
            (r#"{"value":null}"#, ""),
            (r#"{}"#, ""),
        ];

        for (json, expected) in cases {
            let holder: Holder = serde_json::from_str(json)
                .unwrap_or_else(|e| panic!("failed to parse {:?}: {}", json, e));

            assert_eq!(holder.value, expected, "unexpected value for {:?}", json);
        }
    }

    #[test]
    fn rejects_objects() {
        let result = serde_json::from_str::<Holder>(r#"{"value":{"a":1}}"#);

        assert!(result.is_err());
    }
}
