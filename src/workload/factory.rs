use crate::{
    hardware::Accelerator,
    utils::error::CoreMapError,
    workload::{
        computation_node::ComputationNode,
        graph::WorkloadGraph,
        layer_record::{LayerAttributeFactory, LayerRecord},
        mapping::MappingTable,
    },
};

/// Builds a validated workload graph from an ordered list of layer records.
/// Order is significant: a record may only reference producers that appear
/// earlier in the list.
pub struct WorkloadGraphBuilder<'a, F: LayerAttributeFactory> {
    layer_records: &'a [LayerRecord],
    mapping_table: &'a MappingTable,
    accelerator: &'a Accelerator,
    attr_factory: F,
}

impl<'a, F: LayerAttributeFactory> WorkloadGraphBuilder<'a, F> {
    pub fn new(
        layer_records: &'a [LayerRecord],
        mapping_table: &'a MappingTable,
        accelerator: &'a Accelerator,
        attr_factory: F,
    ) -> Self {
        Self {
            layer_records,
            mapping_table,
            accelerator,
            attr_factory,
        }
    }

    /// Construct every computation node with its resolved mapping and wire
    /// producer to consumer edges. Any reference to an undeclared or
    /// not-yet-declared producer, or to the node itself, aborts the build;
    /// no partial graph is returned.
    pub fn build(&self) -> Result<WorkloadGraph, CoreMapError> {
        let mut graph = WorkloadGraph::new();

        for record in self.layer_records {
            let (attributes, node_id, node_name, op_type) =
                self.attr_factory.create_node_attr(record);

            let mapping =
                self.mapping_table
                    .resolve(node_id, &node_name, &op_type, self.accelerator)?;

            graph.add_node(ComputationNode {
                id: node_id,
                name: node_name,
                op_type,
                attributes,
                mapping,
                input_operand_sources: record.input_operand_sources.clone(),
            });

            for &producer_id in record.input_operand_sources.values() {
                if producer_id == node_id {
                    return Err(CoreMapError::SelfReference { node_id });
                }
                // the node itself is already registered, so this only
                // accepts producers declared earlier in the list
                if !graph.contains_node(producer_id) {
                    return Err(CoreMapError::DanglingReference {
                        node_id,
                        producer_id,
                    });
                }
                graph.add_edge(producer_id, node_id);
            }
        }

        tracing::debug!(
            "built workload graph: {} nodes, {} edges",
            graph.node_count(),
            graph.edge_count()
        );
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        hardware::Core,
        workload::{
            NodeId,
            layer_record::DefaultLayerAttributeFactory,
            mapping::{MappingAttributes, MappingKey, SpatialMapping, TilingLoop},
        },
    };
    use std::collections::HashMap;

    fn table() -> MappingTable {
        let mut default = MappingAttributes::new(0, SpatialMapping::new("default_df", vec![]));
        default.intra_core_tiling = vec![TilingLoop::new("OX", 4)];
        default.inter_core_tiling = vec![TilingLoop::new("K", 2)];

        let mut table = MappingTable::new();
        table.insert(MappingKey::Default, default);
        table
    }

    fn record(id: NodeId, sources: &[(&str, NodeId)]) -> LayerRecord {
        let sources: HashMap<String, NodeId> = sources
            .iter()
            .map(|(role, producer)| (role.to_string(), *producer))
            .collect();
        LayerRecord::new("conv", id, format!("layer{id}"), sources)
    }

    fn build(records: &[LayerRecord]) -> Result<WorkloadGraph, CoreMapError> {
        let table = table();
        let accelerator = Accelerator::new("bare");
        WorkloadGraphBuilder::new(records, &table, &accelerator, DefaultLayerAttributeFactory)
            .build()
    }

    #[test]
    fn builds_expected_nodes_and_edges() {
        let records = vec![
            record(1, &[]),
            record(2, &[("x", 1)]),
            record(3, &[("x", 1), ("y", 2)]),
        ];
        let graph = build(&records).unwrap();

        assert_eq!(graph.node_ids(), &[1, 2, 3]);
        assert_eq!(graph.edge_count(), 3);
        assert!(graph.contains_edge(1, 2));
        assert!(graph.contains_edge(1, 3));
        assert!(graph.contains_edge(2, 3));
        assert_eq!(graph.in_degree(1), 0);
        assert!(graph.node(1).unwrap().is_source());
    }

    #[test]
    fn resolved_mappings_carry_default_tilings() {
        let records = vec![record(1, &[])];
        let graph = build(&records).unwrap();

        let mapping = &graph.node(1).unwrap().mapping;
        assert_eq!(mapping.intra_core_tiling, vec![TilingLoop::new("OX", 4)]);
        assert_eq!(mapping.inter_core_tiling, vec![TilingLoop::new("K", 2)]);
    }

    #[test]
    fn core_dataflow_reaches_the_node() {
        let records = vec![record(1, &[])];
        let table = table();
        let core_df = SpatialMapping::new("hw_df", vec![("K".into(), 16)]);
        let mut accelerator = Accelerator::new("onecore");
        accelerator
            .add_core(Core::with_dataflow(0, core_df.clone()))
            .unwrap();

        let graph = WorkloadGraphBuilder::new(
            &records,
            &table,
            &accelerator,
            DefaultLayerAttributeFactory,
        )
        .build()
        .unwrap();

        assert_eq!(graph.node(1).unwrap().mapping.spatial_mapping, core_df);
    }

    #[test]
    fn two_roles_from_one_producer_yield_one_edge() {
        let records = vec![record(1, &[]), record(2, &[("x", 1), ("y", 1)])];
        let graph = build(&records).unwrap();

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.successors(1), &[2]);
    }

    #[test]
    fn undeclared_producer_is_a_dangling_reference() {
        let records = vec![record(1, &[]), record(4, &[("x", 99)])];
        let err = build(&records).unwrap_err();
        assert_eq!(
            err,
            CoreMapError::DanglingReference {
                node_id: 4,
                producer_id: 99
            }
        );
    }

    #[test]
    fn forward_reference_is_a_dangling_reference() {
        // 2 is declared, but after 1 consumes it
        let records = vec![record(1, &[("x", 2)]), record(2, &[])];
        let err = build(&records).unwrap_err();
        assert_eq!(
            err,
            CoreMapError::DanglingReference {
                node_id: 1,
                producer_id: 2
            }
        );
    }

    #[test]
    fn self_reference_is_rejected() {
        let records = vec![record(5, &[("x", 5)])];
        let err = build(&records).unwrap_err();
        assert_eq!(err, CoreMapError::SelfReference { node_id: 5 });
    }
}
