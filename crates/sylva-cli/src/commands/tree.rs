use sylva_lib::TreeView;
use sylva_lib::dump::{Colors, DumpOptions, dump_tree};

use super::input::{self, InputArgs};

pub struct TreeArgs {
    pub input: InputArgs,
    pub spans: bool,
    pub attrs: bool,
    pub color: bool,
}

pub fn run(args: TreeArgs) {
    let input = input::load_or_exit(&args.input);
    let ast = &input.doc.ast;
    let tree = TreeView::new(ast, &input.schema);

    let options = DumpOptions::new()
        .spans(args.spans)
        .attrs(args.attrs)
        .colors(Colors::new(args.color));
    print!("{}", dump_tree(&tree, ast.root(), options));
}
