use tracing::info;

#[derive(Debug, Clone, Default)]
pub struct Stats {
    pub costs: usize,
    pub time_us: usize,
    pub primary_expand_nodes: usize,
    pub twin_expand_nodes: usize,
}

impl Stats {
    pub(crate) fn print(&self) {
        info!(
            "Cost {:?} Time(microseconds) {:?} Primary expand nodes number: {:?} Twin expand nodes number {:?}",
            self.costs, self.time_us, self.primary_expand_nodes, self.twin_expand_nodes
        );
    }
}
