use std::fmt;

use tracing_subscriber::EnvFilter;
use typetable::{Cell, Index, Schema, Visitor};

#[derive(Debug, Clone, Schema)]
#[schema(table = DemoTable)]
pub struct Demo(i32, char, &'static str, #[schema(header = "text")] String);

struct Printer;

impl Visitor for Printer {
    fn visit<T: Cell>(&mut self, index: Index, value: &T) {
        println!("{index}: {value:?}");
    }
}

struct Headers<'a>(&'a [String]);

impl fmt::Display for Headers<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" | "))
    }
}

pub fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let mut table = DemoTable::new();
    println!("{}", Headers(table.headers()));

    table.insert_with((0, '\0', String::from("a"), "b"));
    table.insert_with((0, '\0', String::from("c"), "d"));
    table.insert();

    table.visit::<(i32, char, &'static str, String), _>(&mut Printer);

    table.select_column::<String>(|_, value| {
        if !value.is_empty() {
            println!("{value}");
        }
    });
}
