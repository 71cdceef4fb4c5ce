pub mod builder;
pub mod loader;
pub mod value;

use serde::{Serialize, Deserialize};
use serde_json::{Map, Value};

/// 场景文档: 宿主导出的只读快照
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scene {
    /// 当前选中物体的名字
    pub active_object: Option<String>,
    #[serde(default)]
    pub objects: Vec<SceneObject>,
}

impl Scene {
    /// 按名字查找当前选中的物体
    pub fn active(&self) -> Option<&SceneObject> {
        let name = self.active_object.as_deref()?;
        self.objects.iter().find(|o| o.name == name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SceneObject {
    pub name: String,
    #[serde(default)]
    pub material_slots: Vec<MaterialSlot>,
}

/// 材质槽 (material 可以为空)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MaterialSlot {
    pub material: Option<Material>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Material {
    pub name: String,
    #[serde(default = "default_true")]
    pub use_nodes: bool,
    pub node_tree: Option<NodeTree>,
}

/// 着色器节点图
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NodeTree {
    #[serde(default)]
    pub nodes: Vec<ShaderNode>,
    #[serde(default)]
    pub links: Vec<NodeLink>,
}

/// 图中的一个节点
/// 节点索引即其在 NodeTree::nodes 中的位置；名字允许重复，不做去重
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShaderNode {
    pub name: String,
    /// 节点类型标识 (e.g. "ShaderNodeTexImage")
    pub kind: String,
    #[serde(default)]
    pub inputs: Vec<InputSocket>,
    #[serde(default)]
    pub props: Map<String, Value>,
}

/// 节点的输入插槽
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InputSocket {
    pub name: String,
    /// 插槽存储的值；None 表示该插槽没有值槽位 (如 Shader 插槽)
    #[serde(default)]
    pub value: Option<Value>,
    /// true 时该插槽由连接供值，存储值不参与 diff
    #[serde(default)]
    pub linked: bool,
}

/// 有向连接: 源节点输出 → 目标节点输入
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NodeLink {
    pub from_node: String,
    pub from_socket: String,
    pub to_node: String,
    pub to_socket: String,
}

fn default_true() -> bool {
    true
}
