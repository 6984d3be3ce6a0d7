//! Walkthrough of named enums, runtime enums and column inflation.
//!
//! Run with: cargo run --example demo
//! Set `RUST_LOG=symenum=trace` to see the library's events.

use symenum::{
    enum_type, ColumnAdapter, EnumDefinition, EnumError, EnumLike, EnumRegistry,
    FieldDescriptor, RawValue,
};
use tracing_subscriber::EnvFilter;

// ============================================================================
// Enum declarations
// ============================================================================

enum_type! {
    /// How done a slice of toast is.
    pub Doneness { bread, toasting, toast, burnt }
}

enum_type! {
    /// Permission bits.
    pub Perm { READ = 1, WRITE = 2, EXECUTE = 4 }
}

fn main() -> Result<(), EnumError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Named enums ===\n");

    let toast = Doneness::inflate_symbol("toast")?;
    println!("  {} has ordinal {}", toast, toast.numify());
    println!("  is_toast: {}", toast.is_toast());
    println!("  toast vs bread: {:?}", toast.compare("bread")?);
    println!("  any(toast, burnt): {}", toast.any(["toast", "burnt"])?);
    println!("  next: {}", toast.next()?);

    let exec = Perm::inflate_ordinal(4)?;
    println!("  Perm ordinal 4 is {}", exec);
    println!("  Perm has ordinal 3: {}", Perm::test_ordinal(3));

    match Doneness::coerce_any("charcoal") {
        Ok(v) => println!("  unexpected: {}", v),
        Err(e) => println!("  coerce_any(charcoal): {}", e),
    }

    println!("\n=== Runtime enums ===\n");

    let registry = EnumRegistry::new();
    registry.load_json_str(r#"{"Level": {"symbols": {"LOW": 10, "HIGH": 20}}}"#)?;
    registry.define("Color", EnumDefinition::sequence(["red", "green", "blue"]))?;
    Doneness::register(&registry);
    println!("  registered: {:?}", registry.names());

    let level = registry
        .get("Level")
        .ok_or_else(|| EnumError::Definition("Level missing".into()))?;
    println!("  Level symbols: {:?}", level.ordered_symbols());
    println!("  Level predicates: {:?}", level.predicate_names());

    println!("\n=== Columns ===\n");

    let mut adapter = ColumnAdapter::new();
    adapter.register_fields(
        &registry,
        &[
            FieldDescriptor::new("id"),
            FieldDescriptor::new("doneness").with_enum("Doneness"),
            FieldDescriptor::new("level")
                .with_enum("Level")
                .ordinal_storage(true),
        ],
    )?;

    let row = [
        ("doneness", Some(RawValue::from("burnt"))),
        ("level", Some(RawValue::Int(20))),
        ("level", None),
    ];
    for (field, raw) in row {
        let value = adapter.inflate(field, raw.clone())?;
        let stored = adapter.deflate(field, value.as_ref())?;
        println!("  {:<9} {:?} -> {:?} -> {:?}", field, raw, value, stored);
    }

    Ok(())
}
