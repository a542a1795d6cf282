// Example: build a tree, update a value, and read back the traversal traces.
use fenwick_viz::{Error, FenwickTree};

fn main() -> Result<(), Error> {
    let mut t = FenwickTree::from_values([1, 2, 3, 4])?;
    println!("values={:?} tree={:?}", t.values(), t.tree());

    let sum = t.prefix_sum(4)?;
    println!("prefix_sum(4)={sum} visited={:?}", t.trace().indices());

    t.set_value(2, 5)?;
    println!("set_value(2, 5) visited={:?} tree={:?}", t.trace().indices(), t.tree());

    t.resize(6)?;
    println!("resize(6) values={:?} trace={:?}", t.values(), t.trace());
    Ok(())
}
