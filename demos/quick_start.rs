//! Minimal tour of the chain combinator.
//!
//! Run with: `cargo run --example quick_start`

use try_chain::Chain;

fn main() {
    // Success path: every step runs in order.
    let total = Chain::start(|| Ok::<i32, &str>(10))
        .then(|v| Ok(v * 2))
        .then(|v| Ok(v + 5))
        .catch(|_| -1);
    println!("total = {total}");

    // A failing step freezes the chain; later steps are skipped and the
    // recovery closure produces the fallback.
    let fallback = Chain::start(|| Ok::<i32, &str>(10))
        .then(|_| Err("downstream unavailable"))
        .then(|v| Ok(v + 1))
        .catch(|err| {
            eprintln!("recovered: {err}");
            -1
        });
    println!("fallback = {fallback}");

    // finally hooks run on every path, success or failure.
    let input = "  hello world  ";
    let shouted = Chain::start(|| {
        if input.is_empty() {
            return Err("empty input");
        }
        Ok(input.to_string())
    })
    .then(|s| Ok(s.trim().to_string()))
    .then(|s| Ok(s.to_uppercase()))
    .finally(|| println!("string processing completed"))
    .catch(|err| format!("ERROR: {err}"));
    println!("shouted = {shouted}");
}
