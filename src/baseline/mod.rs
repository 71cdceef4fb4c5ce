use crate::registry::NodeRegistry;
use crate::scene::value::ParamValue;
use crate::scene::{NodeTree, ShaderNode};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::warn;

/// 某个节点类型的默认参数基线 (参数名 → 默认值)
pub type Baseline = HashMap<String, ParamValue>;

/// 临时沙盒: 容纳一个一次性节点实例的独立容器
/// 只在 resolve 内部存活，任何退出路径下都在返回前销毁
struct Sandbox {
    tree: NodeTree,
}

impl Sandbox {
    fn host(registry: &NodeRegistry, kind: &str) -> anyhow::Result<Self> {
        let mut tree = NodeTree::default();
        tree.nodes.push(registry.spawn(kind)?);
        Ok(Self { tree })
    }

    fn instance(&self) -> &ShaderNode {
        &self.tree.nodes[0]
    }
}

/// 获取节点类型默认参数值的解析器，按类型缓存一次报告运行内的结果
pub struct DefaultResolver<'a> {
    registry: &'a NodeRegistry,
    cache: HashMap<String, Arc<Baseline>>,
}

impl<'a> DefaultResolver<'a> {
    pub fn new(registry: &'a NodeRegistry) -> Self {
        Self {
            registry,
            cache: HashMap::new(),
        }
    }

    /// 获取指定节点类型的默认参数值
    pub fn resolve(&mut self, kind: &str) -> Arc<Baseline> {
        if let Some(baseline) = self.cache.get(kind) {
            return baseline.clone();
        }

        let baseline = match Sandbox::host(self.registry, kind) {
            Ok(sandbox) => extract_defaults(sandbox.instance()),
            Err(e) => {
                // Unknown types degrade to an empty baseline: every live
                // field of such nodes is reported as non-default.
                warn!(kind, error = %e, "cannot instantiate node type");
                Baseline::new()
            }
        };

        let baseline = Arc::new(baseline);
        self.cache.insert(kind.to_string(), baseline.clone());
        baseline
    }
}

/// Read every classifiable field of a fresh instance. Fields that do not
/// classify as a scalar or short numeric vector are skipped, never an error.
fn extract_defaults(instance: &ShaderNode) -> Baseline {
    let mut defaults = Baseline::new();

    for input in &instance.inputs {
        if let Some(value) = input.value.as_ref().and_then(ParamValue::classify) {
            defaults.insert(input.name.clone(), value);
        }
    }

    for (prop, raw) in &instance.props {
        if let Some(value) = ParamValue::classify(raw) {
            defaults.insert(prop.clone(), value);
        }
    }

    defaults
}
