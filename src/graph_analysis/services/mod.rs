mod dependents_finder;
mod graph_assembler;

pub use dependents_finder::{DependentsFinder, DependentsMap};
pub use graph_assembler::{ComponentContribution, GraphAssembler};
