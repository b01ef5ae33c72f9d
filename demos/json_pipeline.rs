//! Parse, validate, and transform a JSON document through one chain.
//!
//! Run with: `cargo run --example json_pipeline`

use serde::Deserialize;
use try_chain::Chain;

#[derive(Debug, Deserialize)]
struct Person {
    name: String,
    age: u32,
}

fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn describe(raw: &str) -> String {
    let person = Chain::start(|| serde_json::from_str::<Person>(raw))
        .then(|mut p| {
            p.name = title_case(&p.name);
            Ok(p)
        })
        .finally(|| println!("processed one document"))
        .catch(|err| {
            eprintln!("falling back: {err}");
            Person {
                name: String::from("Unknown"),
                age: 0,
            }
        });

    format!("{} is {} years old", person.name, person.age)
}

fn main() {
    println!("{}", describe(r#"{"name": "john", "age": 30}"#));
    println!("{}", describe("not json at all"));
}
