// Type aliases for data values.
pub type Vertex2 = [f64; 2];
pub type Segment2 = [Vertex2; 2];
pub type Triangle2 = [Vertex2; 3];

// Type aliases for data indices.
pub type VertexIdx = usize;

// Position of a vertex in the lexicographically sorted copy the engine works on.
// This is to know, when a function accepts or returns a usize, what it is for.
pub type SortedIdx = usize;
