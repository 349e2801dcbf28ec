//! Print the arithmetic grammar's node graph.

use llparse_core::Colors;

use crate::util;

pub struct DumpArgs {
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    let calc = util::calculator(u32::MAX);
    let colors = Colors::new(args.color);

    print!("{}", calc.grammar().dump(colors));
    println!("{}root{} {}", colors.dim, colors.reset, calc.root());
}
