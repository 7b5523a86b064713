use klika::{
    core::marker::EdgeType,
    generate::{full, full_citation},
    graph::Graph,
};

fn main() {
    divan::main();
}

#[divan::bench(consts = [16, 128, 1024], types = [klika::core::marker::Directed, klika::core::marker::Undirected])]
fn full_with_loops<const N: usize, Ty: EdgeType>() -> Graph<Ty> {
    full::<Ty>(N as i64, true).unwrap()
}

#[divan::bench(consts = [16, 128, 1024], types = [klika::core::marker::Directed, klika::core::marker::Undirected])]
fn full_without_loops<const N: usize, Ty: EdgeType>() -> Graph<Ty> {
    full::<Ty>(N as i64, false).unwrap()
}

#[divan::bench(consts = [16, 128, 1024])]
fn citation<const N: usize>() -> Graph<klika::core::marker::Directed> {
    full_citation(N as i64).unwrap()
}
