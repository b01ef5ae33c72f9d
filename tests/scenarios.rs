//! Realistic pipelines exercising the chain over non-trivial value types.

use serde::Deserialize;
use try_chain::Chain;

#[test]
fn test_string_chain() {
    let value = Chain::start(|| Ok::<_, &str>(String::from("hello")))
        .then(|s| Ok(s + " world"))
        .catch(|_| String::from("error"));

    assert_eq!(value, "hello world");
}

#[test]
fn test_vec_chain() {
    let value = Chain::start(|| Ok::<_, &str>(vec![1, 2, 3]))
        .then(|mut v| {
            v.push(4);
            Ok(v)
        })
        .catch(|_| Vec::new());

    assert_eq!(value, [1, 2, 3, 4]);
}

#[derive(Debug, PartialEq)]
struct Record {
    id: i32,
    name: String,
}

#[test]
fn test_record_validate_and_transform() {
    let value = Chain::start(|| {
        Ok::<_, String>(Record {
            id: 1,
            name: String::from("John"),
        })
    })
    .then(|record| {
        if record.name.is_empty() {
            return Err(String::from("name cannot be empty"));
        }
        Ok(record)
    })
    .then(|mut record| {
        record.name = record.name.to_uppercase();
        Ok(record)
    })
    .catch(|_| Record {
        id: -1,
        name: String::from("ERROR"),
    });

    assert_eq!(
        value,
        Record {
            id: 1,
            name: String::from("JOHN"),
        }
    );
}

#[test]
fn test_record_validation_failure_uses_fallback() {
    let value = Chain::start(|| {
        Ok::<_, String>(Record {
            id: 7,
            name: String::new(),
        })
    })
    .then(|record| {
        if record.name.is_empty() {
            return Err(String::from("name cannot be empty"));
        }
        Ok(record)
    })
    .then(|_| panic!("transform must not run after validation failure"))
    .catch(|_| Record {
        id: -1,
        name: String::from("ERROR"),
    });

    assert_eq!(value.id, -1);
    assert_eq!(value.name, "ERROR");
}

#[test]
fn test_parse_transform_chain() {
    let value = Chain::start(|| Ok::<_, std::num::ParseIntError>(String::from("5")))
        .then(|s| {
            let n = s.parse::<i32>()?;
            Ok((n * 10).to_string())
        })
        .then(|s| Ok(s + "0"))
        .finally(|| ())
        .catch(|e| format!("error: {e}"));

    assert_eq!(value, "500");
}

#[test]
fn test_line_count_chain() {
    let value = Chain::start(|| Ok::<_, &str>(String::from("file content\nline 2\nline 3")))
        .then(|content| Ok(format!("Line count: {}", content.lines().count())))
        .then(|processed| Ok(processed + " (processed)"))
        .catch(|e| format!("Failed to process file: {e}"));

    assert_eq!(value, "Line count: 3 (processed)");
}

#[derive(Debug, Deserialize, PartialEq)]
struct Person {
    name: String,
    age: u32,
}

#[test]
fn test_json_chain() {
    let raw = r#"{"name": "john", "age": 30}"#;

    let person = Chain::start(|| serde_json::from_str::<Person>(raw))
        .then(|mut p| {
            let mut chars = p.name.chars();
            if let Some(first) = chars.next() {
                p.name = first.to_uppercase().collect::<String>() + chars.as_str();
            }
            Ok(p)
        })
        .catch(|_| Person {
            name: String::from("Unknown"),
            age: 0,
        });

    assert_eq!(
        person,
        Person {
            name: String::from("John"),
            age: 30,
        }
    );
}

#[test]
fn test_json_chain_falls_back_on_malformed_input() {
    let person = Chain::start(|| serde_json::from_str::<Person>("not json"))
        .then(|_| panic!("transform must not run on parse failure"))
        .catch(|_| Person {
            name: String::from("Unknown"),
            age: 0,
        });

    assert_eq!(person.name, "Unknown");
    assert_eq!(person.age, 0);
}
