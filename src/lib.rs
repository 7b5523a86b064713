pub mod core;
pub mod generate;
pub mod graph;

pub mod prelude {
    #[doc(hidden)]
    pub use crate::{
        core::marker::{Directed, Undirected},
        generate::{full, full_citation},
        graph::Graph,
    };
}
