pub mod adjacency_graph;
pub mod adjacency_list;
