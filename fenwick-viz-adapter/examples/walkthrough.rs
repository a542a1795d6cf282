use fenwick_viz_adapter::{Controller, Highlight, InputError, LayoutCell};

// Draws the tree the way the visualization page does: one row per level, each cell spanning the
// values it covers, followed by the editable values. Highlighted cells are marked with `*`
// (update path) or `?` (query path).
fn render(c: &Controller) -> String {
    const WIDTH: usize = 6;
    let tree = c.tree();
    let mut out = String::new();
    for row in c.layout().rows() {
        for cell in row {
            let width = cell.span() * WIDTH;
            match *cell {
                LayoutCell::Node { index, .. } => {
                    let mark = match c.highlight(index) {
                        Highlight::None => ' ',
                        Highlight::Update => '*',
                        Highlight::Query => '?',
                    };
                    let text = format!("{mark}{}", tree.tree()[index]);
                    out.push_str(&format!("[{text:>w$}]", w = width - 2));
                }
                LayoutCell::Gap => out.push_str(&" ".repeat(width)),
            }
        }
        out.push('\n');
    }
    for v in tree.values() {
        out.push_str(&format!("|{v:>w$}|", w = WIDTH - 2));
    }
    out.push_str(&format!("\nsum={}\n", c.last_sum()));
    out
}

fn main() -> Result<(), InputError> {
    let mut c = Controller::default();

    // An adapter forwards raw field contents; invalid text is reported and ignored.
    c.on_length_input("8")?;
    if let Err(e) = c.on_value_input(0, "twelve") {
        println!("rejected: {e}");
    }

    for (i, text) in ["3", "1", "4", "1", "5", "9", "2", "6"].iter().enumerate() {
        c.on_value_input(i, text)?;
    }
    println!("{}", render(&c));

    c.on_value_input(2, "10")?;
    println!("after editing element 2:\n{}", render(&c));

    c.on_sum_button(6)?;
    println!("after pressing button 6:\n{}", render(&c));

    c.on_length_input("5")?;
    println!("after shrinking to 5:\n{}", render(&c));
    Ok(())
}
