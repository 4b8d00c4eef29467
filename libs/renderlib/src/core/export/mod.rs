mod dot;
mod json;
mod mermaid;

pub use dot::graph_dot;
pub use json::compiler_output_json;
pub use mermaid::{graph_flowchart, schedule_gantt};
