use crate::scene::{
    InputSocket, Material, MaterialSlot, NodeLink, NodeTree, Scene, SceneObject, ShaderNode,
};
use serde_json::{Map, Value};

/// 以流式接口构建 NodeTree / Scene，主要用于测试和内嵌调用
pub struct GraphBuilder {
    nodes: Vec<ShaderNode>,
    links: Vec<NodeLink>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            links: Vec::new(),
        }
    }

    pub fn node(self, name: &str, kind: &str) -> NodeBuilder {
        NodeBuilder {
            graph: self,
            node: ShaderNode {
                name: name.to_string(),
                kind: kind.to_string(),
                inputs: Vec::new(),
                props: Map::new(),
            },
        }
    }

    pub fn link(mut self, from_node: &str, from_socket: &str, to_node: &str, to_socket: &str) -> Self {
        self.links.push(NodeLink {
            from_node: from_node.to_string(),
            from_socket: from_socket.to_string(),
            to_node: to_node.to_string(),
            to_socket: to_socket.to_string(),
        });
        self
    }

    pub fn build(self) -> NodeTree {
        NodeTree {
            nodes: self.nodes,
            links: self.links,
        }
    }

    /// 包装为单物体单材质的场景，该物体即选中物体
    pub fn into_scene(self, object: &str, material: &str) -> Scene {
        Scene {
            active_object: Some(object.to_string()),
            objects: vec![SceneObject {
                name: object.to_string(),
                material_slots: vec![MaterialSlot {
                    material: Some(Material {
                        name: material.to_string(),
                        use_nodes: true,
                        node_tree: Some(self.build()),
                    }),
                }],
            }],
        }
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub struct NodeBuilder {
    graph: GraphBuilder,
    node: ShaderNode,
}

impl NodeBuilder {
    pub fn input(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.node.inputs.push(InputSocket {
            name: name.to_string(),
            value: Some(value.into()),
            linked: false,
        });
        self
    }

    /// 由连接供值的插槽 (存储值不参与 diff)
    pub fn linked_input(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.node.inputs.push(InputSocket {
            name: name.to_string(),
            value: Some(value.into()),
            linked: true,
        });
        self
    }

    /// 没有值槽位的插槽 (如 Shader 插槽)
    pub fn bare_input(mut self, name: &str) -> Self {
        self.node.inputs.push(InputSocket {
            name: name.to_string(),
            value: None,
            linked: false,
        });
        self
    }

    pub fn prop(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.node.props.insert(name.to_string(), value.into());
        self
    }

    pub fn done(mut self) -> GraphBuilder {
        self.graph.nodes.push(self.node);
        self.graph
    }
}
