use serde_json::Value;
use std::fmt;

/// 参数值的分类表示: 标量或长度 ≤4 的数值向量 (颜色/向量)
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
    Vector(Vec<f64>),
}

impl ParamValue {
    /// Classify a raw field value. Returns None for anything that cannot be
    /// diffed or displayed: nulls, objects, arrays longer than 4, arrays with
    /// non-numeric elements.
    pub fn classify(raw: &Value) -> Option<Self> {
        match raw {
            Value::Bool(b) => Some(Self::Bool(*b)),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Some(Self::Int(i))
                } else {
                    n.as_f64().map(Self::Float)
                }
            }
            Value::String(s) => Some(Self::Text(s.clone())),
            Value::Array(items) if items.len() <= 4 => {
                let mut elems = Vec::with_capacity(items.len());
                for item in items {
                    elems.push(item.as_f64()?);
                }
                Some(Self::Vector(elems))
            }
            _ => None,
        }
    }

    /// 与基线值比较。Int/Float 之间按数值比较；形状不匹配视为不相等
    pub fn matches(&self, baseline: &Self) -> bool {
        match (self, baseline) {
            (Self::Vector(a), Self::Vector(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x == y)
            }
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Text(a), Self::Text(b)) => a == b,
            (a, b) => match (a.as_f64(), b.as_f64()) {
                (Some(x), Some(y)) => x == y,
                _ => false,
            },
        }
    }

    fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{}", i),
            Self::Float(v) => write!(f, "{:.3}", v),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Text(s) => write!(f, "{}", s),
            Self::Vector(items) => {
                let parts: Vec<String> = items.iter().map(|v| format!("{:.3}", v)).collect();
                write!(f, "[{}]", parts.join(", "))
            }
        }
    }
}
