//! The fixed rule set, in evaluation order.

use snakestyle_core::{LineRuleBox, TreeRuleBox};

use crate::{
    ArgumentNaming, BlankLines, ClassNaming, ConstructSpacing, FunctionNaming, Indentation,
    InlineCommentSpacing, LineTooLong, MutableDefault, TodoComment, UnnecessarySemicolon,
    VariableNaming,
};

/// Returns the nine line rules, S001 through S009, in evaluation order.
#[must_use]
pub fn line_rules() -> Vec<LineRuleBox> {
    vec![
        Box::new(LineTooLong::new()),
        Box::new(Indentation::new()),
        Box::new(UnnecessarySemicolon::new()),
        Box::new(InlineCommentSpacing::new()),
        Box::new(TodoComment::new()),
        Box::new(BlankLines::new()),
        Box::new(ConstructSpacing::new()),
        Box::new(ClassNaming::new()),
        Box::new(FunctionNaming::new()),
    ]
}

/// Returns the three tree rules, S010 through S012, in evaluation order.
#[must_use]
pub fn tree_rules() -> Vec<TreeRuleBox> {
    vec![
        Box::new(ArgumentNaming::new()),
        Box::new(VariableNaming::new()),
        Box::new(MutableDefault::new()),
    ]
}
