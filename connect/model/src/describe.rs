//! Diagnostic rendering of shapes.
//!
//! Every shape displays as `{Name: value, ...}`, listing present members by
//! member name with a leading capital, so camelCase wire members such as
//! `resourceArn` show as `ResourceArn`. Nested shapes render as `{...}`,
//! sequences as `[a, b]` and map keys verbatim. The output is meant for logs;
//! it is not a wire format.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// Writes the diagnostic form of `shape` to `f`.
pub fn write_shape<T: Serialize>(shape: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match serde_json::to_value(shape).map_err(|_| fmt::Error)? {
        Value::Object(members) => {
            f.write_str("{")?;
            for (index, (name, member)) in members.iter().enumerate() {
                if index > 0 {
                    f.write_str(", ")?;
                }
                write_member_name(name, f)?;
                write_value(member, f)?;
            }
            f.write_str("}")
        }
        other => write_value(&other, f),
    }
}

fn write_member_name(name: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut chars = name.chars();
    if let Some(first) = chars.next() {
        write!(f, "{}", first.to_ascii_uppercase())?;
    }
    write!(f, "{}: ", chars.as_str())
}

fn write_value(value: &Value, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match value {
        Value::Null => f.write_str("null"),
        Value::Bool(flag) => write!(f, "{flag}"),
        Value::Number(number) => write!(f, "{number}"),
        Value::String(text) => f.write_str(text),
        Value::Array(items) => {
            f.write_str("[")?;
            for (index, item) in items.iter().enumerate() {
                if index > 0 {
                    f.write_str(", ")?;
                }
                write_value(item, f)?;
            }
            f.write_str("]")
        }
        Value::Object(members) => {
            f.write_str("{")?;
            for (index, (name, member)) in members.iter().enumerate() {
                if index > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{name}: ")?;
                write_value(member, f)?;
            }
            f.write_str("}")
        }
    }
}

/// Implements [`Shape`](connect_define::Shape) and `Display` for shapes.
///
/// The shape name defaults to the type name; `Type = "Name"` overrides it.
macro_rules! impl_shape {
    (@name $shape:ident $name:literal) => {
        $name
    };
    (@name $shape:ident) => {
        stringify!($shape)
    };
    ($( $shape:ident $(= $name:literal)? ),+ $(,)?) => {
        $(
            impl connect_define::Shape for $shape {
                const SHAPE_NAME: &'static str = impl_shape!(@name $shape $($name)?);
            }

            impl std::fmt::Display for $shape {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    $crate::describe::write_shape(self, f)
                }
            }
        )+
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    struct Rendered<T>(T);

    impl<T: Serialize> fmt::Display for Rendered<T> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write_shape(&self.0, f)
        }
    }

    #[derive(Serialize)]
    #[serde(rename_all = "PascalCase")]
    struct Inner {
        name: Option<String>,
    }

    #[derive(Serialize)]
    #[serde(rename_all = "PascalCase")]
    struct Outer {
        #[serde(skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        count: Option<i32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        inner: Option<Inner>,
        #[serde(skip_serializing_if = "Option::is_none")]
        labels: Option<Vec<String>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        tags: Option<BTreeMap<String, String>>,
    }

    #[test]
    fn absent_members_are_not_listed() {
        let outer = Outer {
            id: None,
            count: Some(3),
            inner: None,
            labels: None,
            tags: None,
        };
        assert_eq!(Rendered(outer).to_string(), "{Count: 3}");
    }

    #[test]
    fn nested_values_render_recursively() {
        let outer = Outer {
            id: Some("c-1".to_string()),
            count: None,
            inner: Some(Inner {
                name: Some("basic".to_string()),
            }),
            labels: Some(vec!["a".to_string(), "b".to_string()]),
            tags: Some(BTreeMap::from([("team".to_string(), "core".to_string())])),
        };
        let text = Rendered(outer).to_string();
        assert!(text.contains("Id: c-1"));
        assert!(text.contains("Inner: {Name: basic}"));
        assert!(text.contains("Labels: [a, b]"));
        assert!(text.contains("Tags: {team: core}"));
    }

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Tagged {
        resource_arn: Option<String>,
        tags: Option<BTreeMap<String, String>>,
    }

    #[test]
    fn camel_case_members_are_capitalized() {
        let tagged = Tagged {
            resource_arn: Some("arn:q".to_string()),
            tags: Some(BTreeMap::from([("team".to_string(), "core".to_string())])),
        };
        assert_eq!(
            Rendered(tagged).to_string(),
            "{ResourceArn: arn:q, Tags: {team: core}}"
        );
    }

    #[test]
    fn empty_shape_renders_braces() {
        #[derive(Serialize)]
        struct Empty {}
        assert_eq!(Rendered(Empty {}).to_string(), "{}");
    }
}
