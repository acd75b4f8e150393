//! Builds a 1000-value tree, removes a range, and prints the result.
//!
//! ```sh
//! cargo run -p arbor --example range_demo
//! ```

use arbor::prelude::*;

fn print_levels(tree: &AvlTree<u32>, limit: usize) {
    let values: Vec<String> = tree
        .iterate(Some(limit))
        .map(|v| v.to_string())
        .collect();
    println!("  first {limit} in level order: {}", values.join(" "));
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut tree = AvlTree::with_config(ArenaConfig::new(1000))?;
    for k in 0..1000u32 {
        tree.try_insert(k)?;
    }
    println!(
        "built: len={} height={} root={:?}",
        tree.len(),
        tree.height(),
        tree.root()
    );
    print_levels(&tree, 16);

    let removed = (400..600u32).filter(|k| tree.remove(k).is_some()).count();
    let arena = tree.arena();
    println!(
        "removed {removed}: len={} height={} slots={} free={}",
        tree.len(),
        tree.height(),
        arena.slot_count(),
        arena.free_count()
    );
    print_levels(&tree, 16);

    tree.validate()?;
    println!("invariants hold");
    Ok(())
}
