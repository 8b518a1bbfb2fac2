/// Inbound ports (Driving ports) - Use case interfaces
///
/// These ports define the interfaces that external adapters (e.g., CLI)
/// use to query a loaded graph.
pub mod graph_query_port;

pub use graph_query_port::GraphQueryPort;
