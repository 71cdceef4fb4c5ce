pub mod image;

use crate::baseline::{Baseline, DefaultResolver};
use crate::registry::NodeRegistry;
use crate::scene::value::ParamValue;
use crate::scene::{Material, Scene, ShaderNode};
use std::fmt::Write;

/// 不参与 diff 的节点属性:
/// 选中状态、布局几何、结构连接、以及表格中已单独展示的身份字段
const EXCLUDED_PROPS: &[&str] = &[
    "select",
    "location",
    "width",
    "height",
    "dimensions",
    "parent",
    "name",
    "label",
    "bl_idname",
];

/// 生成选中物体材质节点图的 Markdown 差异报告
pub struct ReportGenerator<'a> {
    resolver: DefaultResolver<'a>,
}

impl<'a> ReportGenerator<'a> {
    pub fn new(registry: &'a NodeRegistry) -> Self {
        Self {
            resolver: DefaultResolver::new(registry),
        }
    }

    /// 生成报告。永远返回尽力而为的文本，从不失败
    pub fn generate(&mut self, scene: &Scene) -> String {
        let Some(object) = scene.active() else {
            return "**Error**: no object selected".to_string();
        };

        if object.material_slots.is_empty() {
            return format!("**Info**: object '{}' has no materials", object.name);
        }

        let mut out = String::new();
        let _ = writeln!(out, "# Material nodes for '{}'\n", object.name);

        for slot in &object.material_slots {
            self.write_material(&mut out, slot.material.as_ref());
        }

        out
    }

    fn write_material(&mut self, out: &mut String, material: Option<&Material>) {
        let Some(material) = material else {
            out.push_str("## Material 'None' does not use nodes\n\n");
            return;
        };

        let tree = match (&material.node_tree, material.use_nodes) {
            (Some(tree), true) => tree,
            _ => {
                let _ = writeln!(out, "## Material '{}' does not use nodes\n", material.name);
                return;
            }
        };

        if tree.nodes.is_empty() {
            let _ = writeln!(out, "## Material '{}' has no nodes\n", material.name);
            return;
        }

        let _ = writeln!(out, "## Material: {}\n", material.name);
        out.push_str("### Nodes\n\n");
        out.push_str("| Index | Name | Type | Parameters |\n");
        out.push_str("| ----- | ---- | ---- | ---------- |\n");

        for (index, node) in tree.nodes.iter().enumerate() {
            let entries = self.diff_node(node);
            let cell = if entries.is_empty() {
                "all default".to_string()
            } else {
                entries.join("<br>")
            };
            let _ = writeln!(out, "| {} | {} | {} | {} |", index, node.name, node.kind, cell);
        }

        out.push_str("\n### Connections\n\n");
        if tree.links.is_empty() {
            out.push_str("no connections\n");
        } else {
            for link in &tree.links {
                let _ = writeln!(
                    out,
                    "- `{}`.`{}` -> `{}`.`{}`",
                    link.from_node, link.from_socket, link.to_node, link.to_socket
                );
            }
        }
        out.push_str("\n---\n\n");
    }

    /// Collect the node's report entries in display order: image texture info
    /// first, then socket diffs, then prop diffs.
    fn diff_node(&mut self, node: &ShaderNode) -> Vec<String> {
        let baseline = self.resolver.resolve(&node.kind);
        let mut entries = Vec::new();

        if node.kind == "ShaderNodeTexImage" {
            entries.extend(image::describe(node));
        }

        diff_sockets(node, &baseline, &mut entries);
        diff_props(node, &baseline, &mut entries);
        entries
    }
}

fn diff_sockets(node: &ShaderNode, baseline: &Baseline, entries: &mut Vec<String>) {
    for input in &node.inputs {
        if input.linked {
            continue;
        }
        let Some(value) = input.value.as_ref().and_then(ParamValue::classify) else {
            continue;
        };
        let is_default = baseline.get(&input.name).is_some_and(|b| value.matches(b));
        if !is_default {
            entries.push(format!("{}: {}", input.name, value));
        }
    }
}

fn diff_props(node: &ShaderNode, baseline: &Baseline, entries: &mut Vec<String>) {
    for (prop, raw) in &node.props {
        if EXCLUDED_PROPS.contains(&prop.as_str()) {
            continue;
        }
        let Some(value) = ParamValue::classify(raw) else {
            continue;
        };
        match baseline.get(prop) {
            Some(default) if value.matches(default) => {}
            // No baseline entry: cannot establish a default, report it.
            _ => entries.push(format!("{}: {}", prop, value)),
        }
    }
}
