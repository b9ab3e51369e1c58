pub mod declarations;
mod field_grammar;
mod grammar_set;
mod type_grammar;

pub use field_grammar::FieldGrammar;
pub use grammar_set::GrammarSet;
pub use type_grammar::TypeGrammar;
