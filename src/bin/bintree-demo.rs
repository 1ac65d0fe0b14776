//! Builds a few sample trees and prints what they look like.
//!
//! Set `RUST_LOG` (e.g. `RUST_LOG=trace`) to see what the library logs along the way.

use std::error::Error;

use bintree::{OrderingViolation, Tree};
use log::LevelFilter;
use simple_logger::SimpleLogger;

fn main() -> Result<(), Box<dyn Error>> {
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()?;

    let mut unbalanced = Tree::new();
    unbalanced.append(vec![0, 1, 2, 3, 4, 5, 6]);

    let mut balanced = Tree::new();
    balanced.append(vec![3, 1, 5, 0, 2, 4, 6]);

    for (name, tree) in [("Unbalanced", &unbalanced), ("Balanced", &balanced)] {
        tree.validate().map_err(OrderingViolation::cloned)?;
        println!("{} tree has depth {}", name, tree.depth());
        println!("{} tree has balance factor {}", name, tree.balance());
    }

    let mut tree = Tree::new();
    for value in [5, 1, 10, -2] {
        tree.insert(value);
    }
    let squares = tree.map(|x| x * x);

    println!("Tree contents: {:?}", tree.to_list());
    println!("Squared tree contents: {:?}", squares.to_list());
    println!("Sum: {}", tree.fold(0, |acc, x| acc + x));
    println!("Max: {}", tree.fold(-10000, |acc, &x| std::cmp::max(acc, x)));

    unbalanced.rebalance();
    log::info!(
        "rebalanced the unbalanced tree to depth {}",
        unbalanced.depth()
    );

    Ok(())
}
