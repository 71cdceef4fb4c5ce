pub mod shader;

use crate::scene::ShaderNode;
use anyhow::{Result, anyhow};
use std::collections::HashMap;

/// 节点类型定义接口
/// spawn 返回一个全新的、未连接、未修改的节点实例，即该类型的默认状态
pub trait NodeSpec: Send + Sync {
    fn name(&self) -> &str;
    fn spawn(&self) -> ShaderNode;
}

/// 节点类型注册表，承担宿主的"按类型实例化节点"能力
pub struct NodeRegistry {
    specs: HashMap<String, Box<dyn NodeSpec>>,
}

impl NodeRegistry {
    pub fn new() -> Self {
        Self {
            specs: HashMap::new(),
        }
    }

    /// 预注册标准着色器节点类型
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(shader::PrincipledBsdfSpec));
        registry.register(Box::new(shader::DiffuseBsdfSpec));
        registry.register(Box::new(shader::TexImageSpec));
        registry.register(Box::new(shader::MixRgbSpec));
        registry.register(Box::new(shader::MathSpec));
        registry.register(Box::new(shader::NormalMapSpec));
        registry.register(Box::new(shader::TexCoordSpec));
        registry.register(Box::new(shader::OutputMaterialSpec));
        registry
    }

    pub fn register(&mut self, spec: Box<dyn NodeSpec>) {
        self.specs.insert(spec.name().to_string(), spec);
    }

    pub fn spawn(&self, kind: &str) -> Result<ShaderNode> {
        let spec = self
            .specs
            .get(kind)
            .ok_or_else(|| anyhow!("Node spec not found: {}", kind))?;
        Ok(spec.spawn())
    }

    /// 已注册的类型标识，按字典序
    pub fn kinds(&self) -> Vec<&str> {
        let mut kinds: Vec<&str> = self.specs.keys().map(|k| k.as_str()).collect();
        kinds.sort_unstable();
        kinds
    }
}

impl Default for NodeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
